//! Admin API surface.
//!
//! CRUD over posts keyed by `(locale, id)`, gated by a bearer API key.
//! Mounted only when `admin.enabled` is set; the locale redirect
//! middleware leaves `/admin/...` alone unless `locale.redirect_admin`
//! says otherwise.

pub mod auth;
pub mod handlers;

use axum::routing::get;
use axum::{middleware, Router};

use self::auth::admin_auth_middleware;
use self::handlers::*;
use crate::http::server::AppState;

pub fn setup_admin_router(state: AppState) -> Router {
    Router::new()
        .route("/admin/locales", get(list_locales))
        .route("/admin/posts/{locale}", get(list_posts).post(create_post))
        .route(
            "/admin/posts/{locale}/{id}",
            get(fetch_post).put(update_post).delete(delete_post),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ))
        .with_state(state)
}
