//! Configuration types for the catalog

use serde::{Deserialize, Serialize};
use tunebox_core::{CatalogError, Result};

/// Default number of entries kept in the playback history
pub const DEFAULT_HISTORY_SIZE: usize = 5;

/// Default name of the library collection
pub const DEFAULT_LIBRARY_NAME: &str = "Music Library";

/// Shuffle algorithm used when shuffle is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// Uniform random permutation
    #[default]
    Random,

    /// Random, but spreads artists apart
    Smart,
}

/// Configuration for a catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Name of the library collection (default: "Music Library")
    pub library_name: String,

    /// Maximum history size (default: 5)
    pub history_size: usize,

    /// Whether the library starts shuffled (default: false)
    pub shuffle: bool,

    /// Shuffle algorithm (default: Random)
    pub shuffle_mode: ShuffleMode,

    /// Fixed RNG seed for reproducible shuffles (default: none)
    pub shuffle_seed: Option<u64>,

    /// Load the built-in songs at startup (default: true)
    pub seed_defaults: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            library_name: DEFAULT_LIBRARY_NAME.to_string(),
            history_size: DEFAULT_HISTORY_SIZE,
            shuffle: false,
            shuffle_mode: ShuffleMode::Random,
            shuffle_seed: None,
            seed_defaults: true,
        }
    }
}

impl CatalogConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.library_name.trim().is_empty() {
            return Err(CatalogError::config("library_name cannot be empty"));
        }
        if self.history_size == 0 {
            return Err(CatalogError::config("history_size must be >= 1"));
        }
        Ok(())
    }
}
