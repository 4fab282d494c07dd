//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SiteConfig (validated, immutable)
//!     → shared via Arc to all subsystems
//!
//! On reload:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → server swaps the locale router snapshot
//!     → invalid reloads are logged and dropped
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults so an empty file is a valid config
//! - Validation separates syntactic (serde) from semantic checks and
//!   reports every error, not just the first

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{AdminConfig, ListenerConfig, LocaleConfig, ObservabilityConfig, SiteConfig};
