//! Store configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::storage::is_valid_key;

/// Key the story list is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "rootprints_stories";

/// Picture used for stories submitted without one.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1504198266285-165f5e2f3d0d?auto=format&fit=crop&w=800&q=60";

/// Stories shown in the home page preview.
pub const FEATURED_COUNT: usize = 2;

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the story store. Missing TOML fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Letters, digits, `_` and `-` only.
    pub storage_key: String,
    pub placeholder_image: String,
    pub featured_count: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            featured_count: FEATURED_COUNT,
        }
    }
}

impl StoreConfig {
    /// Parse configuration from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_key(&self.storage_key) {
            return Err(ConfigError::Invalid(format!(
                "storage_key {:?} must be non-empty letters, digits, '_' or '-'",
                self.storage_key
            )));
        }
        Ok(())
    }
}
