//! Actix-Web wrapper around the redirect [`Engine`](redirect_rules::Engine)

use actix_http::StatusCode;
use actix_http::header::HeaderValue;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use redirect_rules::{CompileError, Decision, Engine, Redirect, RedirectStatus, RuleSet};

use crate::Middleware;

use super::error::Error;
use super::util;

#[derive(Clone, Debug)]
/// Actix-Web compatible wrapper on [`Engine`](redirect_rules::Engine)
pub struct Redirector {
    engine: Engine,
    trust_forwarded_proto: bool,
}

impl Redirector {
    /// Creates a new [`Redirector`] instance without any rules.
    pub fn new() -> Self {
        Self::with_engine(Engine::new())
    }

    /// Wrap an existing engine handle.
    ///
    /// Rules published through any clone of the engine are picked up
    /// by the middleware on the next request.
    pub fn with_engine(engine: Engine) -> Self {
        Self {
            engine,
            trust_forwarded_proto: true,
        }
    }

    /// Builder method compiling and publishing the given rules.
    pub fn rules(self, rules: &RuleSet) -> Result<Self, CompileError> {
        self.engine.load(rules)?;
        Ok(self)
    }

    /// Configure whether `X-Forwarded-Proto` is trusted when picking the
    /// scheme of redirects to an override host.
    ///
    /// Default is true.
    pub fn trust_forwarded_proto(mut self, trust: bool) -> Self {
        self.trust_forwarded_proto = trust;
        self
    }

    /// Underlying engine handle
    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Evaluates the given [`HttpRequest`](actix_web::HttpRequest) against
    /// the active rules.
    pub fn decide(&self, req: &HttpRequest) -> Decision {
        self.engine
            .decide(&util::request_signals(req, self.trust_forwarded_proto))
    }

    /// Evaluates the given [`HttpRequest`](actix_web::HttpRequest) and
    /// builds the redirect response if a rule matched.
    pub fn redirect(&self, req: &HttpRequest) -> Result<Option<HttpResponse>, Error> {
        match self.decide(req) {
            Decision::Redirect(redirect) => Ok(Some(response(redirect)?)),
            Decision::PassThrough => Ok(None),
        }
    }

    /// Converts Redirector Instance into Actix-Web Middleware
    ///
    /// # Examples
    ///
    /// ```
    /// use actix_web::App;
    /// use actix_redirect::{HostRule, Redirector, RuleSet};
    ///
    /// let rules = RuleSet::default().host(HostRule::new("old.example").prefix("/", "/new/"));
    /// let redirector = Redirector::new().rules(&rules).expect("invalid rules");
    ///
    /// let app = App::new()
    ///     .wrap(redirector.middleware());
    /// ```
    #[inline]
    pub fn middleware(self) -> Middleware {
        self.into()
    }
}

impl Default for Redirector {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Engine> for Redirector {
    #[inline]
    fn from(value: Engine) -> Self {
        Self::with_engine(value)
    }
}

#[inline]
pub(crate) fn status_code(status: RedirectStatus) -> StatusCode {
    match status {
        RedirectStatus::MovedPermanently => StatusCode::MOVED_PERMANENTLY,
        RedirectStatus::TemporaryRedirect => StatusCode::TEMPORARY_REDIRECT,
        RedirectStatus::PermanentRedirect => StatusCode::PERMANENT_REDIRECT,
    }
}

/// Build the http response for a redirect decision
pub(crate) fn response(redirect: Redirect) -> Result<HttpResponse, Error> {
    let status = status_code(redirect.status);
    let location = HeaderValue::try_from(redirect.target)?;
    Ok(HttpResponse::build(status)
        .insert_header((header::LOCATION, location))
        .finish())
}
