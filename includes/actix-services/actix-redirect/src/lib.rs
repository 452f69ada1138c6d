//! Actix-Web Middleware issuing redirects from declarative per-host rules.
//!
//! Requests are matched by host (`example.com`, `*.example.com` or `*`)
//! and then by path, trying exact paths, longest prefixes and regex
//! rewrites in that order. Matching requests are answered with a redirect,
//! everything else is passed to the wrapped service unchanged.
//!
//! # Example
//!
//! ```
//! use actix_web::App;
//! use actix_redirect::{HostRule, RedirectStatus, Redirector, RuleSet};
//!
//! let rules = RuleSet::default().host(
//!     HostRule::new("exact.example")
//!         .to_host("success.example")
//!         .status(RedirectStatus::MovedPermanently)
//!         .exact("/old", "/new")
//!         .prefix("/docs/", "/manual/"),
//! );
//! let redirector = Redirector::new().rules(&rules).expect("failed to compile rules");
//!
//! let app = App::new()
//!   .wrap(redirector.middleware());
//! ```
mod error;
mod factory;
mod redirect;
mod service;
pub mod util;

pub use error::Error;
pub use factory::Middleware;
pub use redirect::Redirector;
pub use service::RedirectService;

pub use redirect_rules::{
    CompileError, Decision, Engine, HostRule, PrefixRule, RedirectStatus, RegexRule, RuleSet,
};
