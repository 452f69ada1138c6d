use std::future::{Ready, ready};
use std::rc::Rc;

use actix_service::Transform;
use actix_web::{
    Error,
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse},
};
use redirect_rules::Engine;

use crate::redirect::Redirector;
use crate::service::{RedirectInner, RedirectService};

/// Redirect middleware factory.
///
/// Every worker service built from it shares the same [`Redirector`] and
/// therefore the same [`Engine`]: rules loaded into the engine after the
/// server started apply to the next request on every worker.
///
/// # Examples
///
/// ```
/// use actix_web::App;
/// use actix_redirect::{Engine, HostRule, Middleware, RuleSet};
///
/// let engine = Engine::new();
/// let app = App::new().wrap(Middleware::from(engine.clone()));
///
/// // published later, e.g. from a reload task
/// let rules = RuleSet::default().host(
///     HostRule::new("*.old.example")
///         .to_host("new.example")
///         .exact("/", "/welcome")
///         .regex(r"^/u/(\d+)$", "/users/$1"),
/// );
/// engine.load(&rules).expect("failed to compile rules");
/// ```
pub struct Middleware(Rc<Redirector>);

impl Middleware {
    #[inline]
    pub fn new(redirector: Redirector) -> Self {
        Self(Rc::new(redirector))
    }

    /// Engine handle consulted by the built services
    #[inline]
    pub fn engine(&self) -> &Engine {
        self.0.engine()
    }
}

impl From<Redirector> for Middleware {
    #[inline]
    fn from(value: Redirector) -> Self {
        Self::new(value)
    }
}

impl From<Engine> for Middleware {
    /// Wrap an engine with default request signal handling
    #[inline]
    fn from(value: Engine) -> Self {
        Self::new(Redirector::with_engine(value))
    }
}

impl<S> Transform<S, ServiceRequest> for Middleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = RedirectService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectService(Rc::new(RedirectInner {
            service: Rc::new(service),
            redirector: Rc::clone(&self.0),
        }))))
    }
}
