//! Locale handling subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → accept_language.rs (parse header, rank candidates)
//!     → locale.rs (validate against supported set)
//!     → Return: resolved Locale (or default)
//!
//! Content lookup:
//!     Locale
//!     → locale.rs (CollectionId mapping)
//!     → content store collection name
//! ```
//!
//! # Design Decisions
//! - Supported set is closed and compile-time fixed: {ja, en, ko}
//! - Default locale is `ja`; every fallback path lands there
//! - Header parsing never fails: malformed entries are skipped
//! - Collection naming is a single pure function, not string
//!   concatenation at call sites

pub mod accept_language;
pub mod locale;

pub use accept_language::resolve_locale;
pub use locale::{CollectionId, Locale};
