//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Initialize subsystems → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then core, then listener
//! - SIGTERM/Ctrl-C trigger graceful shutdown via a broadcast channel

pub mod shutdown;

pub use shutdown::Shutdown;
