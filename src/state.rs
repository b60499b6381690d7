//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::notes::NotesSession;
use crate::storage::AssetStore;

/// Error type for state initialization
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to prepare asset directory {path}: {source}")]
    AssetDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    assets: AssetStore,
    notes: NotesSession,
}

impl AppState {
    /// Create the application state
    ///
    /// Creates the asset directory if it does not exist yet.
    pub fn new(config: Config) -> Result<Self, StateError> {
        let assets = AssetStore::open(&config.assets.dir).map_err(|source| StateError::AssetDir {
            path: config.assets.dir.display().to_string(),
            source,
        })?;

        match assets.asset_count() {
            Ok(count) => tracing::info!(assets = count, "Asset directory ready"),
            Err(e) => tracing::warn!("Failed to count existing assets: {}", e),
        }

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                assets,
                notes: NotesSession::new(),
            }),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the asset store
    pub fn assets(&self) -> &AssetStore {
        &self.inner.assets
    }

    /// Get the current notes session
    pub fn notes(&self) -> &NotesSession {
        &self.inner.notes
    }
}
