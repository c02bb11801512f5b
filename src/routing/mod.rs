//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → router.rs (parse path templates)
//!     → Freeze as immutable RouteTable
//!
//! Redirect to a symbolic route:
//!     RouteDescriptor (name or controller/action + params)
//!     → RouteTable::url_for
//!     → absolute Url on the request origin, or ResolveError
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex: `:param` segments only
//! - Deterministic: params substitute in order, leftovers go to the query

pub mod router;

pub use router::RouteTable;
