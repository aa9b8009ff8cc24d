//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::Player;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Log file for interactive play (the terminal is busy with the board).
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Symbol drawn for player X.
    #[serde(default = "default_x_symbol")]
    x_symbol: String,

    /// Symbol drawn for player O.
    #[serde(default = "default_o_symbol")]
    o_symbol: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

fn default_x_symbol() -> String {
    "X".to_string()
}

fn default_o_symbol() -> String {
    "O".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_file: default_log_file(),
            x_symbol: default_x_symbol(),
            o_symbol: default_o_symbol(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// The symbol drawn for a player.
    pub fn symbol(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x_symbol,
            Player::O => &self.o_symbol,
        }
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
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.symbol(Player::X), "X");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x_symbol = \"✕\"\nlog_filter = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.symbol(Player::X), "✕");
        assert_eq!(config.symbol(Player::O), "O");
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x_symbol = [not toml").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }
}
