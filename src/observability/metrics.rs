//! Metrics collection and exposition.
//!
//! # Metrics
//! - `nav_requests_total` (counter): navigation requests by route, outcome
//! - `nav_resolve_duration_seconds` (histogram): matching latency
//!
//! # Design Decisions
//! - Labels carry the route name and the outcome (view / redirect /
//!   no_match / error), never the raw path — label cardinality stays
//!   bounded by the table size

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one navigation request.
pub fn record_navigation(outcome: &str, route: &str, start: Instant) {
    counter!(
        "nav_requests_total",
        "route" => route.to_string(),
        "outcome" => outcome.to_string()
    )
    .increment(1);
    histogram!(
        "nav_resolve_duration_seconds",
        "route" => route.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
