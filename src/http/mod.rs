//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, layers)
//!     → request.rs (request ID injection/propagation)
//!     → middleware.rs (locale redirect decision)
//!     → handlers.rs (public content endpoints)
//!     → response.rs (error mapping)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
