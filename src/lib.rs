//! Multi-locale content site server library.

pub mod admin;
pub mod config;
pub mod content;
pub mod http;
pub mod i18n;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
