//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! redirect engine, http server:
//!     → logging.rs (structured log events)
//!     → metrics.rs (decision counters)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
