//! Observability subsystem.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Env filter wins over config so operators can override per-run
//! - Prometheus exposition on a separate port, off by default

pub mod logging;
pub mod metrics;
