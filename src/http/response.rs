//! Response error mapping.
//!
//! # Responsibilities
//! - Map store failures to HTTP status codes
//! - Keep error bodies machine-readable JSON
//!
//! # Design Decisions
//! - 404 for missing posts, 409 for slug conflicts
//! - Error detail stays terse; internals are never echoed to clients

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::content::store::StoreError;

/// API-facing error wrapper.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        let status = match err {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::DuplicateSlug(_) => StatusCode::CONFLICT,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
