//! Configuration management and validation.
//!
//! Settings are resolved in layers: built-in defaults, then an optional TOML
//! file, then environment variables. Command-line flags are applied last by
//! the CLI before [`Config::validate`] runs.
//!
//! ```toml
//! [logging]
//! level = "info"
//!
//! [query]
//! jurisdiction = "PA"
//!
//! [cache]
//! enabled = true
//!
//! [output]
//! format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{
    APP_CONFIG_DIR, CONFIG_FILE_NAME, DEFAULT_JURISDICTION, DEFAULT_LOG_LEVEL, ENV_JURISDICTION,
    ENV_LOG_LEVEL, LOG_LEVELS,
};
use crate::{Error, Result};

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub query: QueryConfig,
    pub cache: CacheConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Plate-issuing jurisdiction counted by fines per capita
    pub jurisdiction: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            jurisdiction: DEFAULT_JURISDICTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Memoize average market value per ZIP code
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}

impl Config {
    /// Default config file location (`<config dir>/zipstats/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_CONFIG_DIR).join(CONFIG_FILE_NAME))
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))
    }

    /// Read a TOML config file; sections and keys it omits keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Load configuration using layered approach (defaults -> file -> env)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Reading config file: {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            debug!("{} overrides log level with {}", ENV_LOG_LEVEL, level);
            self.logging.level = level;
        }
        if let Some(jurisdiction) = lookup(ENV_JURISDICTION) {
            debug!("{} overrides jurisdiction with {}", ENV_JURISDICTION, jurisdiction);
            self.query.jurisdiction = jurisdiction;
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let level = self.logging.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(Error::configuration(format!(
                "Invalid log level '{}', expected one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }

        if self.query.jurisdiction.trim().is_empty() {
            return Err(Error::configuration("Jurisdiction must not be empty"));
        }

        Ok(())
    }
}
