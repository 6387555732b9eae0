//! Shared utilities for commands
//!
//! - `open_store` - Open the JSON entry store
//! - `load_config` - Load tracker configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wisemind_core::{JsonFileStore, TrackerConfig};

/// Fallback store file when no data directory is available
const FALLBACK_STORE: &str = "wisemind.json";

/// Open the entry store at `path`, or at the default location
pub fn open_store(path: Option<&Path>) -> JsonFileStore {
    let path = path
        .map(Path::to_path_buf)
        .or_else(JsonFileStore::default_path)
        .unwrap_or_else(|| PathBuf::from(FALLBACK_STORE));
    tracing::debug!(path = %path.display(), "Using entry store");
    JsonFileStore::new(path)
}

/// Load tracker config from `path`, or from the default override location
pub fn load_config(path: Option<&Path>) -> Result<TrackerConfig> {
    match path {
        Some(path) => TrackerConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => TrackerConfig::load().context("Failed to load config"),
    }
}
