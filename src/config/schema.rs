//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! site server. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the site server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Locale routing behavior.
    pub locale: LocaleConfig,

    /// Public site metadata (canonical origin for sitemap/robots).
    pub site: SiteMetaConfig,

    /// Admin API settings.
    pub admin: AdminConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Locale routing behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Redirect `/admin/...` paths to locale-qualified paths.
    ///
    /// The original site never settled this; it is a flag here rather
    /// than a guess. Off by default: the admin surface lives at
    /// `/admin` without a locale prefix.
    pub redirect_admin: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            redirect_admin: false,
        }
    }
}

/// Public site metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteMetaConfig {
    /// Canonical origin used in generated sitemap/robots URLs.
    pub base_url: String,
}

impl Default for SiteMetaConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }
}

/// Admin API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Mount the admin API.
    pub enabled: bool,

    /// API key for authentication (Bearer token).
    pub api_key: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            // WARNING: This is a placeholder! Change this in production.
            api_key: "CHANGE_ME_IN_PRODUCTION".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
