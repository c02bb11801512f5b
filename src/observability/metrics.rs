//! Metrics collection and exposition.
//!
//! # Metrics
//! - `turbolinks_redirects_total` (counter): redirects by outcome
//!   (`instruction`, `http_redirect`)

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Counter name for redirect decisions.
pub const REDIRECTS_TOTAL: &str = "turbolinks_redirects_total";

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one redirect decision.
pub fn record_decision(outcome: &'static str) {
    ::metrics::counter!(REDIRECTS_TOTAL, "outcome" => outcome).increment(1);
}
