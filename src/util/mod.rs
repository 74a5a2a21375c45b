//! Shared utilities for the dictionary manager.
//!
//! - `settings`: configuration loaded from a JSON settings file
//! - `logging`: applies the configured level to the `log` facade

mod logging;
mod settings;

pub use logging::{apply_log_level, default_level};
pub use settings::{Config, ConfigError, ExpansionConfig, APP_DIR_NAME, DEFAULT_SETTINGS_FILE};
