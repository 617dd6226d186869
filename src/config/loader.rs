use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS};

/// Why a config file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// `<config dir>/tally/config.toml`, where the config dir comes from
    /// `dirs::config_dir()` and falls back to the working directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("tally").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: defaults are returned instead.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is a `ReadError`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::ParseError { source, .. } => ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses and validates TOML content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: PathBuf::new(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that `ui.tick_rate_ms` is within the supported range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tick = self.ui.tick_rate_ms;
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&tick) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.tick_rate_ms must be between {} and {}, got {}",
                    MIN_TICK_RATE_MS, MAX_TICK_RATE_MS, tick
                ),
            });
        }

        Ok(())
    }
}
