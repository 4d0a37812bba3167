//! Configuration management for recipe-reviews

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Store settings
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
        }
    }
}

/// Store-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the review table snapshot; the platform data directory is
    /// used when unset
    pub path: Option<PathBuf>,
    /// Whether index scans run newest-first within a partition
    pub newest_first: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: None,
            newest_first: true,
        }
    }
}
