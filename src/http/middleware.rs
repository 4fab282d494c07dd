//! Locale redirect middleware.
//!
//! # Responsibilities
//! - Run the locale router on every inbound request before route
//!   matching
//! - Emit a temporary redirect when the decision calls for one
//!
//! # Design Decisions
//! - The router snapshot is read through ArcSwap, so a config reload
//!   swaps it without touching in-flight requests
//! - Redirect `Location` is origin-relative; scheme and host of the
//!   incoming request are always preserved
//! - 307 keeps the method intact for the (rare) non-GET hit

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::routing::classifier;
use crate::routing::RoutingDecision;

/// Classify the request and either pass it through or redirect it to a
/// locale-qualified path.
pub async fn locale_redirect(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let router = state.locale_router.load();

    let path = request.uri().path().to_string();
    let query = request.uri().query().map(|q| q.to_string());
    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string());

    match router.decide(&path, query.as_deref(), accept_language.as_deref()) {
        RoutingDecision::Pass => next.run(request).await,
        RoutingDecision::Redirect { target } => {
            let target_path = target.split('?').next().unwrap_or(&target);
            if let Some(locale) = classifier::locale_prefix(target_path) {
                metrics::record_redirect(locale);
            }
            tracing::debug!(from = %path, to = %target, "Locale redirect");
            Redirect::temporary(&target).into_response()
        }
    }
}

/// Record one counter line per handled request.
pub async fn record_request_metrics(request: Request<Body>, next: Next) -> Response {
    let method = request.method().to_string();
    let response = next.run(request).await;
    metrics::record_request(&method, response.status().as_u16());
    response
}
