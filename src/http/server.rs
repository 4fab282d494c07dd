//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, locale redirect)
//! - Run the server with graceful shutdown
//! - Apply hot-reloaded configuration to the locale router

use arc_swap::ArcSwap;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::admin;
use crate::config::SiteConfig;
use crate::content::store::{ContentStore, MemoryStore};
use crate::http::handlers;
use crate::http::middleware::{locale_redirect, record_request_metrics};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::routing::{LocaleRouter, RouterOptions};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub locale_router: Arc<ArcSwap<LocaleRouter>>,
    pub config: Arc<SiteConfig>,
}

/// HTTP server for the content site.
pub struct HttpServer {
    router: Router,
    state: AppState,
}

impl HttpServer {
    /// Create a server backed by the default in-memory store.
    pub fn new(config: SiteConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryStore::new()))
    }

    /// Create a server with an explicit content store.
    pub fn with_store(config: SiteConfig, store: Arc<dyn ContentStore>) -> Self {
        let locale_router = Arc::new(ArcSwap::from_pointee(LocaleRouter::new(RouterOptions {
            redirect_admin: config.locale.redirect_admin,
        })));

        let state = AppState {
            store,
            locale_router,
            config: Arc::new(config),
        };

        let router = Self::build_router(state.clone());
        Self { router, state }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let mut app = Router::new()
            .route("/robots.txt", get(handlers::robots))
            .route("/sitemap.xml", get(handlers::sitemap))
            .route("/{locale}", get(handlers::home))
            .route("/{locale}/reports", get(handlers::list_reports))
            .route("/{locale}/report/{slug}", get(handlers::get_report))
            .with_state(state.clone());

        if state.config.admin.enabled {
            app = app.merge(admin::setup_admin_router(state.clone()));
        }

        // Redirect classification runs before route matching; trace and
        // request ID wrap everything.
        app.layer(middleware::from_fn_with_state(state.clone(), locale_redirect))
            .layer(middleware::from_fn(record_request_metrics))
            .layer(TimeoutLayer::new(Duration::from_secs(
                state.config.timeouts.request_secs,
            )))
            .layer(propagate_request_id_layer())
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Configuration updates from the watcher are applied by swapping
    /// the locale router snapshot; listener-level settings require a
    /// restart.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<SiteConfig>,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let locale_router = self.state.locale_router.clone();
        tokio::spawn(async move {
            while let Some(new_config) = config_updates.recv().await {
                locale_router.store(Arc::new(LocaleRouter::new(RouterOptions {
                    redirect_admin: new_config.locale.redirect_admin,
                })));
                tracing::info!(
                    redirect_admin = new_config.locale.redirect_admin,
                    "Locale router configuration reloaded"
                );
            }
        });

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.state.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_redirect_without_network() {
        let server = HttpServer::new(SiteConfig::default());
        let response = server
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/contact")
                    .header("accept-language", "ko-KR,en;q=0.8")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()["location"], "/ko/contact");
    }

    #[tokio::test]
    async fn test_locale_listing_route_passes() {
        let server = HttpServer::new(SiteConfig::default());
        let response = server
            .router
            .clone()
            .oneshot(Request::builder().uri("/ja").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_excluded_asset_falls_back_to_not_found() {
        // Pass-through assets land on the /{locale} route; the bad
        // segment must read as a missing page, not a client error
        let server = HttpServer::new(SiteConfig::default());
        for path in ["/shiftjapan-og.png", "/favicon.ico", "/robots.json"] {
            let response = server
                .router
                .clone()
                .oneshot(
                    Request::builder()
                        .uri(path)
                        .header("accept-language", "ko")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
        }
    }

    #[tokio::test]
    async fn test_admin_router_absent_when_disabled() {
        let server = HttpServer::new(SiteConfig::default());
        let response = server
            .router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/admin/locales")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
