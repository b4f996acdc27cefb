//! Metrics collection and exposition.
//!
//! # Metrics
//! - `hook_probes_total` (counter): probes by result (healthy, unhealthy, error)
//! - `hook_validations_total` (counter): invocations by outcome
//! - `hook_validation_duration_seconds` (histogram): wall time per invocation
//!
//! Without an installed recorder every call here is a no-op, so one-shot
//! invocations pay nothing.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus exporter with its own HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_probe(result: &'static str) {
    counter!("hook_probes_total", "result" => result).increment(1);
}

pub fn record_validation(outcome: &'static str, started: Instant) {
    counter!("hook_validations_total", "outcome" => outcome).increment(1);
    histogram!("hook_validation_duration_seconds", "outcome" => outcome)
        .record(started.elapsed().as_secs_f64());
}
