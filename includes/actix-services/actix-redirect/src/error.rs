//! Error and Result module

use actix_web::ResponseError;
use derive_more::{Display, Error, From};

/// Errors which occur when turning a redirect decision into a response
#[derive(Debug, Display, From, Error)]
#[non_exhaustive]
pub enum Error {
    #[display("Redirect target is not a valid Location header")]
    InvalidLocation(actix_http::header::InvalidHeaderValue),
}

impl ResponseError for Error {
    /// Returns `500 Internal Server Error`.
    fn status_code(&self) -> actix_web::http::StatusCode {
        actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
    }
}
