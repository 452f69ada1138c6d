use std::{ops::Deref, rc::Rc};

use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, forward_ready},
    error::Error as ActixError,
};
use futures_core::future::LocalBoxFuture;

use super::redirect::Redirector;

/// Assembled redirect service
#[derive(Clone)]
pub struct RedirectService<S>(pub(crate) Rc<RedirectInner<S>>);

impl<S> Deref for RedirectService<S> {
    type Target = RedirectInner<S>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct RedirectInner<S> {
    pub(crate) service: Rc<S>,
    pub(crate) redirector: Rc<Redirector>,
}

impl<S> Service<ServiceRequest> for RedirectService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = ActixError> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let this = Rc::clone(&self.0);
        Box::pin(async move {
            let redirect = this
                .redirector
                .redirect(req.request())
                .inspect_err(|err| tracing::error!("redirect failed {err:?}"))?;

            match redirect {
                Some(res) => Ok(req.into_response(res)),
                None => this.service.call(req).await,
            }
        })
    }
}
