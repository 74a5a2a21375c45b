//! Configuration for the dictionary manager.
//!
//! Settings live in a JSON file, by default `<config dir>/dictionary-manager/settings.json`.
//! Every field has a default, so a missing file or a partial file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Directory name under the platform config directory
pub const APP_DIR_NAME: &str = "dictionary-manager";

/// Default settings file name
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Error types for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Settings file exists but could not be read
    #[error("Failed to read settings from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Settings file is not valid JSON for `Config`
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    /// `logLevel` is not a recognised level name
    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),
    /// The platform has no config directory
    #[error("Could not determine config directory")]
    NoConfigDir,
}

/// Text expansion options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpansionConfig {
    /// Match `from` regardless of case
    pub case_insensitive: bool,
    /// Only match `from` as a whole word
    pub whole_word: bool,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            case_insensitive: true,
            whole_word: true,
        }
    }
}

/// Top-level settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Log level name (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: Option<String>,
    pub expansion: ExpansionConfig,
}

impl Config {
    /// Path of the settings file in the platform config directory
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(DEFAULT_SETTINGS_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load settings from a file, falling back to defaults if it doesn't exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        crate::debug!("Loading settings from {:?}", path);

        if !path.exists() {
            crate::debug!("No settings file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_json(&content)?;
        crate::info!("Loaded settings from {:?}", path);
        Ok(config)
    }

    /// Load settings from the default path
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&Self::default_path()?)
    }

    /// Parse settings from a JSON string
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content)?;
        config.level_filter()?;
        Ok(config)
    }

    /// Resolve the configured log level, or the build default when unset
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        match &self.log_level {
            None => Ok(super::default_level()),
            Some(level) => level
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel(level.clone())),
        }
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
