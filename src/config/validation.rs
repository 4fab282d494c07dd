//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and the canonical origin URL
//! - Reject unusable admin setups before they reach the server
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into the system (startup and reload)

use std::net::SocketAddr;
use url::Url;

use crate::config::schema::SiteConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// One semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address is not a valid socket address: {0:?}")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address is not a valid socket address: {0:?}")]
    InvalidMetricsAddress(String),

    #[error("observability.log_level must be one of trace/debug/info/warn/error, got {0:?}")]
    InvalidLogLevel(String),

    #[error("site.base_url is not a valid URL: {0:?}")]
    InvalidBaseUrl(String),

    #[error("admin.api_key must be set when the admin API is enabled")]
    MissingAdminKey,

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if Url::parse(&config.site.base_url).is_err() {
        errors.push(ValidationError::InvalidBaseUrl(config.site.base_url.clone()));
    }

    if config.admin.enabled
        && (config.admin.api_key.is_empty() || config.admin.api_key == "CHANGE_ME_IN_PRODUCTION")
    {
        errors.push(ValidationError::MissingAdminKey);
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
