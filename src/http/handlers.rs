//! Public content endpoints.
//!
//! Every handler receives the resolved locale as an explicit path
//! parameter; nothing reads locale from ambient state. By the time a
//! request reaches these handlers the redirect middleware has already
//! guaranteed a locale prefix is present.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use crate::content::model::{Post, PostSummary};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::i18n::locale::SUPPORTED_LOCALES;
use crate::i18n::Locale;

/// Parse the leading path segment as a locale.
///
/// Excluded paths pass the redirect middleware untouched and can land
/// on the `/{locale}` routes (`/favicon.ico` matches `/{locale}`), so
/// an unsupported segment is a missing page, not a bad request.
fn locale_segment(segment: &str) -> Result<Locale, ApiError> {
    segment
        .parse()
        .map_err(|_| ApiError::not_found("page not found"))
}

/// `GET /{locale}` serves the home listing, newest posts first.
pub async fn home(
    Path(locale): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    let locale = locale_segment(&locale)?;
    Ok(Json(state.store.list(locale)))
}

/// `GET /{locale}/reports` serves the full listing for the reports index.
pub async fn list_reports(
    Path(locale): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PostSummary>>, ApiError> {
    let locale = locale_segment(&locale)?;
    Ok(Json(state.store.list(locale)))
}

/// `GET /{locale}/report/{slug}` serves one post with its body blocks.
pub async fn get_report(
    Path((locale, slug)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<Post>, ApiError> {
    let locale = locale_segment(&locale)?;
    let post = state.store.get(locale, &slug)?;
    Ok(Json(post))
}

/// `GET /robots.txt`
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    let base = state.config.site.base_url.trim_end_matches('/').to_string();
    let body = format!(
        "User-agent: *\nAllow: /\nDisallow: /admin\n\nSitemap: {base}/sitemap.xml\n"
    );
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

/// `GET /sitemap.xml` covers all locale roots plus every published report.
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let base = state.config.site.base_url.trim_end_matches('/').to_string();

    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    for locale in SUPPORTED_LOCALES {
        xml.push_str(&format!("  <url><loc>{base}/{locale}</loc></url>\n"));
        for summary in state.store.list(locale) {
            xml.push_str(&format!(
                "  <url><loc>{base}/{locale}/report/{slug}</loc><lastmod>{lastmod}</lastmod></url>\n",
                slug = summary.slug,
                lastmod = summary.updated_at.format("%Y-%m-%d"),
            ));
        }
    }
    xml.push_str("</urlset>\n");

    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
