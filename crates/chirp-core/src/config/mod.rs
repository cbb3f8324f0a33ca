//! Configuration management for chirp.
//!
//! Settings come from an optional TOML file and are then overridden by the
//! `LOG_SEVERITY_LEVEL`, `LOG_OUTPUT_FORMAT` and `LOG_ESCAPE_JSON`
//! environment variables.

mod types;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    ///
    /// Only the TOML structure is checked. `level` and `format` are kept as
    /// written and resolved by [`crate::Logger::configure`], which reports a
    /// bad level as an `error` record and treats any format but `json` as plain.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories:
    /// - macOS: ~/Library/Application Support/com.chirp.chirp/config.toml
    /// - Linux: ~/.config/chirp/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\chirp\config\config.toml
    ///
    /// Falls back to ~/.chirp/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "chirp", "chirp")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".chirp").join("config.toml")
            })
    }

    /// Expand a user-supplied path (`~` allowed).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).into_owned())
    }

    /// Apply environment overrides on top of the loaded values.
    pub fn with_env(mut self) -> Self {
        self.logging
            .apply_overrides(|key| std::env::var(key).ok());
        self
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Logger, MemorySink, OutputFormat, Settings, Severity};
    use std::io::Write;
    use std::sync::Arc;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "plain");
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[logging]"));
        assert!(toml.contains("level = \"info\""));
        assert!(toml.contains("escape_json = false"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"warn\"\nformat = \"json\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "json");
        assert!(!config.logging.escape_json);
    }

    #[test]
    fn test_load_from_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nescape_json = true").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.escape_json);
    }

    #[test]
    fn test_load_from_keeps_format_spelling() {
        for format in ["JSON", " Json ", "text", "xml"] {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "[logging]\nlevel = \"debug\"\nformat = \"{format}\"").unwrap();

            let config = Config::load_from(file.path()).unwrap();
            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.logging.format, format);
        }
    }

    #[test]
    fn test_loaded_bad_level_reaches_logger() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"shouting\"\nformat = \"JSON\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.logging.level, "shouting");

        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new(Settings::default()).with_sink(Arc::clone(&sink));
        logger.configure(&config.logging);

        assert_eq!(logger.severity(), Severity::Info);
        assert_eq!(logger.output_format(), OutputFormat::Json);
        let records = sink.records();
        assert_eq!(records.len(), 1);
        let parsed: serde_json::Value = serde_json::from_str(&records[0]).unwrap();
        assert_eq!(parsed["level"], "error");
        assert_eq!(parsed["msg"], "unknown severity level shouting");
    }

    #[test]
    fn test_load_from_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging\nlevel = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_expand_path_plain() {
        assert_eq!(Config::expand_path("/etc/chirp.toml"), PathBuf::from("/etc/chirp.toml"));
    }
}
