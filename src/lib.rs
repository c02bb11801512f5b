//! Turbolinks-aware redirects for Axum.
//!
//! Handlers redirect through [`redirect::RedirectContext`]; mutating XHR
//! requests get a `Turbolinks.visit(...)` script instead of a `Location`
//! redirect.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod redirect;
pub mod routing;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use redirect::{RedirectContext, RedirectOptions, RedirectTarget, Redirector, RouteDescriptor};
