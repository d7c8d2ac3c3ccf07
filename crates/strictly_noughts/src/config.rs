//! Engine configuration.

use crate::{GameState, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for starting new games.
///
/// ```toml
/// starting_mark = "O"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mark that moves first (defaults to `X`).
    #[serde(default)]
    starting_mark: Mark,
}

impl GameConfig {
    /// Creates a configuration with the given starting mark.
    pub fn new(starting_mark: Mark) -> Self {
        Self { starting_mark }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(starting_mark = %config.starting_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Creates a fresh game using these settings.
    pub fn new_game(&self) -> GameState {
        GameState::with_starting_mark(self.starting_mark)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_starts_with_cross() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(*config.starting_mark(), Mark::Cross);
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_naught_first() {
        let config = GameConfig::from_toml_str(r#"starting_mark = "O""#).unwrap();
        assert_eq!(config.new_game().current_mark(), Mark::Naught);
    }

    #[test]
    fn test_bad_mark_rejected() {
        let err = GameConfig::from_toml_str(r#"starting_mark = "Z""#).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
