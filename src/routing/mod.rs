//! Locale routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path, Accept-Language)
//!     → classifier.rs (excluded path? locale prefix present?)
//!     → router.rs (resolve locale, build redirect target)
//!     → Return: RoutingDecision::Pass or RoutingDecision::Redirect
//! ```
//!
//! # Design Decisions
//! - Exclusions are checked before any locale logic (asset and API
//!   requests must never redirect)
//! - Locale prefix detection is an exact segment match, not a prefix
//!   length check (`/january` is not `/ja`)
//! - Only two terminal outcomes; the router cannot fail
//! - Deterministic: same path + header always yields the same decision

pub mod classifier;
pub mod router;

pub use router::{LocaleRouter, RouterOptions, RoutingDecision};
