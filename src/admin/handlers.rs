use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::content::model::{Post, PostDraft, PostSummary};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::i18n::locale::SUPPORTED_LOCALES;
use crate::i18n::Locale;
use crate::observability::metrics;

#[derive(Serialize)]
pub struct LocaleInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub collection: String,
}

/// `GET /admin/locales` lists the supported set with collection names.
pub async fn list_locales() -> Json<Vec<LocaleInfo>> {
    let locales = SUPPORTED_LOCALES
        .into_iter()
        .map(|l| LocaleInfo {
            code: l.as_str(),
            name: l.display_name(),
            collection: l.collection().to_string(),
        })
        .collect();
    Json(locales)
}

/// `GET /admin/posts/{locale}` lists summaries, newest first.
pub async fn list_posts(
    Path(locale): Path<Locale>,
    State(state): State<AppState>,
) -> Json<Vec<PostSummary>> {
    Json(state.store.list(locale))
}

/// `POST /admin/posts/{locale}` creates a post from a draft.
pub async fn create_post(
    Path(locale): Path<Locale>,
    State(state): State<AppState>,
    Json(draft): Json<PostDraft>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.store.create(locale, draft)?;
    metrics::record_admin_write("create");
    tracing::info!(locale = %locale, id = %post.id, slug = %post.slug, "Post created");
    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /admin/posts/{locale}/{id}`
pub async fn fetch_post(
    Path((locale, id)): Path<(Locale, Uuid)>,
    State(state): State<AppState>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.store.fetch(locale, id)?))
}

/// `PUT /admin/posts/{locale}/{id}` replaces the draft fields.
pub async fn update_post(
    Path((locale, id)): Path<(Locale, Uuid)>,
    State(state): State<AppState>,
    Json(draft): Json<PostDraft>,
) -> Result<Json<Post>, ApiError> {
    let post = state.store.update(locale, id, draft)?;
    metrics::record_admin_write("update");
    tracing::info!(locale = %locale, id = %id, "Post updated");
    Ok(Json(post))
}

/// `DELETE /admin/posts/{locale}/{id}`
pub async fn delete_post(
    Path((locale, id)): Path<(Locale, Uuid)>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(locale, id)?;
    metrics::record_admin_write("delete");
    tracing::info!(locale = %locale, id = %id, "Post deleted");
    Ok(StatusCode::NO_CONTENT)
}
