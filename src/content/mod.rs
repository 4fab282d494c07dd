//! Content subsystem.
//!
//! # Data Flow
//! ```text
//! Public read:
//!     (locale, slug) → store.rs → model.rs Post → JSON response
//! Listing:
//!     (locale) → store.rs → PostSummary[] ordered newest-first
//! Admin write:
//!     (locale, id) + PostDraft → store.rs create/update/delete
//! ```
//!
//! # Design Decisions
//! - Store access is a trait; the hosted database behind the original
//!   site is out of scope, so the in-memory implementation is the
//!   default backend
//! - Every operation is keyed by locale through `CollectionId`; there
//!   is no cross-locale query

pub mod model;
pub mod store;

pub use model::{ContentBlock, Post, PostDraft, PostSummary};
pub use store::{ContentStore, MemoryStore, StoreError};
