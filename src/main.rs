//! Multi-locale content site server.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                 SITE SERVER                   │
//!                      │                                               │
//!   Client Request     │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ──────────────────▶│  │  http   │──▶│ routing  │──▶│ handlers  │  │
//!                      │  │ server  │   │ (locale) │   │ + content │  │
//!                      │  └─────────┘   └────┬─────┘   └─────┬─────┘  │
//!                      │                     │               │        │
//!                      │              redirect to        content      │
//!                      │              /{locale}{path}     store       │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │          Cross-Cutting Concerns          │ │
//!                      │  │  config · observability · lifecycle      │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use insight_site::config::watcher::ConfigWatcher;
use insight_site::config::{load_config, SiteConfig};
use insight_site::lifecycle::shutdown::watch_signals;
use insight_site::observability::logging::init_logging;
use insight_site::observability::metrics::init_metrics;
use insight_site::{HttpServer, Shutdown};

#[derive(Parser, Debug)]
#[command(name = "insight-site", version, about = "Multi-locale content site server")]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SiteConfig::default(),
    };

    init_logging(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        redirect_admin = config.locale.redirect_admin,
        admin_enabled = config.admin.enabled,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Hot reload only runs when a config file was given.
    let (config_updates, _watcher_guard) = match &args.config {
        Some(path) => {
            let (watcher, rx) = ConfigWatcher::new(path);
            let guard = watcher.run()?;
            (rx, Some(guard))
        }
        None => {
            let (_tx, rx) = tokio::sync::mpsc::unbounded_channel();
            (rx, None)
        }
    };

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    let server = HttpServer::new(config);
    let serve = tokio::spawn(async move {
        if let Err(e) = server.run(listener, config_updates, server_shutdown).await {
            tracing::error!(error = %e, "Server error");
        }
    });

    watch_signals(&shutdown).await;
    serve.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
