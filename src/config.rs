//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::session::GameMode;

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tic_tac_theme.toml";

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path of the SQLite settings database.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// Mode a new session starts in.
    #[serde(default)]
    mode: GameMode,
}

fn default_db_path() -> String {
    "tic_tac_theme.db".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            mode: GameMode::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(db_path = %config.db_path, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with command-line overrides applied.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, db_path: Option<String>, mode: Option<GameMode>) -> Self {
        if let Some(db_path) = db_path {
            debug!(%db_path, "Overriding database path");
            self.db_path = db_path;
        }
        if let Some(mode) = mode {
            debug!(%mode, "Overriding mode");
            self.mode = mode;
        }
        self
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.db_path(), "tic_tac_theme.db");
    }

    #[test]
    fn test_parses_fields() {
        let config =
            AppConfig::from_toml("db_path = \"/tmp/t.db\"\nmode = \"player-vs-bot\"\n").unwrap();
        assert_eq!(config.db_path(), "/tmp/t.db");
        assert_eq!(*config.mode(), GameMode::PlayerVsBot);
    }

    #[test]
    fn test_bad_mode_rejected() {
        let err = AppConfig::from_toml("mode = \"solitaire\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::default()
            .with_overrides(Some("other.db".to_string()), Some(GameMode::PlayerVsBot));
        assert_eq!(config.db_path(), "other.db");
        assert_eq!(*config.mode(), GameMode::PlayerVsBot);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::load_or_default("definitely/not/here.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
