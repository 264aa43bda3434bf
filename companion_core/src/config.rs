//! Companion configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::reply::{ReplyEngine, ReplyRule};
use crate::typing::TypingDelay;

/// First line Root says in every new chat.
pub const DEFAULT_GREETING: &str =
    "Hi — I am Root, your cultural companion. Tell me what you want to explore or share!";

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

/// Settings for chat sessions. Missing TOML fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub greeting: String,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,

    /// Extra rules, checked after the built-in ones, as `[[rules]]` tables.
    pub rules: Vec<ReplyRule>,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        let delay = TypingDelay::default();
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            min_delay_ms: delay.min_ms,
            max_delay_ms: delay.max_ms,
            rules: Vec::new(),
        }
    }
}

impl CompanionConfig {
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

    /// The configured delay range.
    pub fn typing_delay(&self) -> TypingDelay {
        TypingDelay::new(self.min_delay_ms, self.max_delay_ms)
    }

    /// The built-in rule table followed by the configured rules.
    pub fn reply_engine(&self) -> ReplyEngine {
        let mut engine = ReplyEngine::scripted();
        engine.extend_rules(self.rules.iter().cloned());
        engine
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_delay_ms >= self.max_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "min_delay_ms ({}) must be below max_delay_ms ({})",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        Ok(())
    }
}
