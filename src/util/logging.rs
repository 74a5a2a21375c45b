//! Log level handling.
//!
//! The crate logs through the `log` facade and leaves installing a backend to
//! the host; this only applies the configured level.

use log::LevelFilter;

use super::{Config, ConfigError};

/// Debug builds log at debug, release builds at info
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Set the facade's max level from configuration
pub fn apply_log_level(config: &Config) -> Result<LevelFilter, ConfigError> {
    let level = config.level_filter()?;
    log::set_max_level(level);
    crate::debug!("Log level set to {}", level);
    Ok(level)
}

#[cfg(test)]
#[path = "logging_test.rs"]
mod tests;
