//! Configuration file watcher for hot reload.
//!
//! # Responsibilities
//! - Watch the config file and emit validated configs on change
//! - Absorb editor event bursts (one reload per burst, not per event)
//! - Drop invalid or unchanged reloads without disturbing the server
//!
//! # Design Decisions
//! - Reload failures keep the current configuration; the watcher never
//!   propagates a broken config
//! - A reload that parses to the same config as last time is not
//!   re-emitted

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::config::loader::load_config;
use crate::config::schema::SiteConfig;

/// Editors fire several modify events per save; collapse each burst
/// into one reload.
const DEBOUNCE_WINDOW: Duration = Duration::from_millis(250);

/// A watcher that monitors the configuration file for changes.
pub struct ConfigWatcher {
    path: PathBuf,
    update_tx: mpsc::UnboundedSender<SiteConfig>,
}

impl ConfigWatcher {
    /// Create a new ConfigWatcher.
    ///
    /// Returns the watcher and a receiver for configuration updates.
    pub fn new(path: &Path) -> (Self, mpsc::UnboundedReceiver<SiteConfig>) {
        let (update_tx, update_rx) = mpsc::unbounded_channel();

        (
            Self {
                path: path.to_path_buf(),
                update_tx,
            },
            update_rx,
        )
    }

    /// Start watching the file in a background thread.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.update_tx.clone();
        let path = self.path.clone();
        let mut last_reload: Option<Instant> = None;
        let mut last_good: Option<String> = None;

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if !(event.kind.is_modify() || event.kind.is_create()) {
                        return;
                    }
                    let now = Instant::now();
                    if last_reload.is_some_and(|t| now.duration_since(t) < DEBOUNCE_WINDOW) {
                        return;
                    }
                    last_reload = Some(now);

                    match load_config(&path) {
                        Ok(new_config) => {
                            // toml text is not canonical; compare the parsed form
                            let fingerprint = toml::to_string(&new_config).unwrap_or_default();
                            if last_good.as_deref() == Some(fingerprint.as_str()) {
                                tracing::debug!(path = ?path, "Config unchanged, skipping reload");
                                return;
                            }
                            last_good = Some(fingerprint);
                            tracing::info!(path = ?path, "Configuration reloaded");
                            let _ = tx.send(new_config);
                        }
                        Err(e) => {
                            tracing::error!(
                                "Failed to reload config: {}. Keeping current configuration.",
                                e
                            );
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}
