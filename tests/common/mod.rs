//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use insight_site::config::SiteConfig;
use insight_site::content::store::MemoryStore;
use insight_site::http::HttpServer;
use insight_site::lifecycle::Shutdown;

/// Start a site server on an ephemeral port backed by the given store.
///
/// The returned `Shutdown` keeps the server alive for the test's
/// duration; dropping it without triggering just leaks the task until
/// the test process exits.
pub async fn spawn_site_with_store(
    config: SiteConfig,
    store: Arc<MemoryStore>,
) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let (_config_tx, config_updates) = mpsc::unbounded_channel();

    let server = HttpServer::with_store(config, store);
    tokio::spawn(async move {
        let _ = server.run(listener, config_updates, server_shutdown).await;
    });

    // Give the acceptor a moment to come up
    tokio::time::sleep(Duration::from_millis(50)).await;
    (addr, shutdown)
}

/// Start a site server with an empty store.
#[allow(dead_code)]
pub async fn spawn_site(config: SiteConfig) -> (SocketAddr, Shutdown) {
    spawn_site_with_store(config, Arc::new(MemoryStore::new())).await
}

/// Client that surfaces redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
