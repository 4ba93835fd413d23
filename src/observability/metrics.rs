//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mock_proxy_exchanges_total` (counter): processed requests by outcome
//! - `mock_proxy_exchange_duration_seconds` (histogram): pipeline latency by outcome
//! - `mock_proxy_mocks_registered` (gauge): current registry size
//! - `mock_proxy_ledger_entries` (gauge): current ledger size

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one finished pipeline run.
pub fn record_exchange(outcome: &'static str, start: Instant, ledger_len: usize) {
    metrics::counter!("mock_proxy_exchanges_total", "outcome" => outcome).increment(1);
    metrics::histogram!("mock_proxy_exchange_duration_seconds", "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
    metrics::gauge!("mock_proxy_ledger_entries").set(ledger_len as f64);
}

/// Record the registry size after a registration.
pub fn record_mock_count(count: usize) {
    metrics::gauge!("mock_proxy_mocks_registered").set(count as f64);
}
