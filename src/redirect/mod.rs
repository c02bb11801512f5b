//! Redirect decision subsystem.
//!
//! # Data Flow
//! ```text
//! handler: ctx.redirect_to(target, options)
//!     → options.rs (change/keep validation, normalization)
//!     → engine.rs (eligibility from method + XHR marker)
//!     → target.rs (resolve to absolute URL via UrlResolver)
//!     → decision.rs (RedirectDecision)
//!     → IntoResponse:
//!         Instruction  → 200 text/javascript, instruction.rs body
//!         HttpRedirect → 3xx + Location
//! ```

pub mod decision;
pub mod engine;
pub mod error;
pub mod extract;
pub mod instruction;
pub mod options;
pub mod request;
pub mod target;

pub use decision::RedirectDecision;
pub use engine::{Redirector, DEFAULT_REDIRECT_STATUS};
pub use error::{RedirectError, RedirectResult, ResolveError};
pub use extract::{RedirectContext, RedirectState};
pub use instruction::{VisitDirective, VisitInstruction, JAVASCRIPT_CONTENT_TYPE};
pub use options::{QueryKeys, RedirectOptions};
pub use request::RedirectRequest;
pub use target::{RedirectTarget, RouteDescriptor, UrlResolver};
