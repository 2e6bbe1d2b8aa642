//! Configuration management
//!
//! Settings are read from `~/.config/propbrief/config.toml` (XDG standard)
//! or an explicit path. Every section is optional and falls back to the
//! built-in defaults.
//!
//! ```toml
//! [reconcile.priority]
//! listing = 3
//! county = 2
//! hoa = 1
//!
//! [[reconcile.conflicts]]
//! field = "square_feet"
//! threshold = 0.05
//! reason = "Square footage varies by more than 5%"
//!
//! [score]
//! core_weight = 15
//! optional_weight = 5
//! optional_budget = 25
//!
//! [enrichment]
//! model = "gpt-3.5-turbo"
//! timeout_secs = 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::{CompletenessScorer, ReconcileConfig, Reconciler, ScoreConfig};
use crate::paths;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting has an unusable value
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Source priorities and conflict rules
    #[serde(default)]
    pub reconcile: ReconcileConfig,
    /// Completeness scoring
    #[serde(default)]
    pub score: ScoreConfig,
    /// Narrative enrichment
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
    /// Persistence
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Narrative enrichment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Whether to attempt a language-model summary at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Chat completion endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Response length cap
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request time budget in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

const fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

const fn default_max_tokens() -> u32 {
    150
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl EnrichmentConfig {
    /// Read the API key from the configured environment variable
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env).ok().filter(|k| !k.trim().is_empty())
    }
}

/// Persistence settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from an explicit path, or the default location
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (paths::config_file(), false),
        };

        if !required && !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_toml(&content)
    }

    /// Parse and validate config from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every setting is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.reconcile.conflicts {
            if rule.field.trim().is_empty() {
                return Err(ConfigError::Invalid("conflict rule with empty field".to_string()));
            }
            if !rule.threshold.is_finite() || rule.threshold < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "conflict threshold for '{}' must be a non-negative number",
                    rule.field
                )));
            }
        }
        if self.score.core_weight == 0 || self.score.optional_weight == 0 {
            return Err(ConfigError::Invalid("score weights must be positive".to_string()));
        }
        if self.score.max_score == 0 {
            return Err(ConfigError::Invalid("max_score must be positive".to_string()));
        }
        if self.enrichment.timeout_secs == 0 {
            return Err(ConfigError::Invalid("enrichment timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// Data directory: explicit override, then config, then platform default
    #[must_use]
    pub fn data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.storage.data_dir.clone())
            .unwrap_or_else(paths::data_dir)
    }

    /// Build a reconciler from these settings
    #[must_use]
    pub fn reconciler(&self) -> Reconciler {
        Reconciler::new(self.reconcile.clone())
    }

    /// Build a completeness scorer from these settings
    #[must_use]
    pub fn scorer(&self) -> CompletenessScorer {
        CompletenessScorer::new(self.score.clone())
    }
}
