//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the logging subsystem
//! - Configure log level from config, overridable via RUST_LOG
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Safe to call once per process; later calls are no-ops

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured level applies
/// to this crate and tower_http.
pub fn init_logging(log_level: &str) {
    let default_filter = format!("insight_site={log_level},tower_http={log_level}");

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
