//! Shopping List State Management
//!
//! This module manages the application state: the CSV store and the
//! location of the data directory backing it.

use super::store::ListStore;
use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state owning the CSV store
pub struct AppState {
    /// CSV persistence for the shopping and recommended lists.
    pub store: ListStore,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_env()
    }
}

impl AppState {
    /// Creates state over an explicit data directory. Used directly by
    /// tests; production startup goes through [`AppState::from_env`].
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            store: ListStore::new(data_dir),
        }
    }

    /// Creates state from the environment: `DATA_DIR` when set, otherwise
    /// a located `data` directory.
    pub fn from_env() -> Self {
        let data_dir = match env::var("DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => {
                let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                Self::locate_data_directory(&current_dir)
            }
        };

        info!("Using data directory: {:?}", data_dir);

        Self::new(data_dir)
    }

    /// Attempts to locate the data directory using a multi-step strategy
    fn locate_data_directory(current_dir: &Path) -> PathBuf {
        // Strategy to locate data:
        // 1. ./data
        // 2. ../data (if running from a subdir)
        // 3. Fallback to "data", created on first use

        if current_dir.join("data").exists() {
            return current_dir.join("data");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("data").exists() {
                return parent.join("data");
            }
        }

        PathBuf::from("data")
    }
}
