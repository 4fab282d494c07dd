//! Metrics collection and exposition.
//!
//! # Metrics
//! - `site_requests_total` (counter): requests by method and status
//! - `site_locale_redirects_total` (counter): redirects by target locale
//! - `site_admin_writes_total` (counter): admin mutations by operation
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic counters under the hood)
//! - Prometheus exposition runs on its own listener

use metrics::counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

use crate::i18n::Locale;

/// Start the Prometheus exposition endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to start metrics endpoint"),
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16) {
    counter!(
        "site_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record one locale redirect.
pub fn record_redirect(locale: Locale) {
    counter!(
        "site_locale_redirects_total",
        "locale" => locale.as_str()
    )
    .increment(1);
}

/// Record one admin mutation.
pub fn record_admin_write(operation: &'static str) {
    counter!(
        "site_admin_writes_total",
        "operation" => operation
    )
    .increment(1);
}
