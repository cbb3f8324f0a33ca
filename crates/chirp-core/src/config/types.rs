//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Environment variable holding the severity threshold text.
pub const ENV_SEVERITY_LEVEL: &str = "LOG_SEVERITY_LEVEL";

/// Environment variable holding the output format text.
pub const ENV_OUTPUT_FORMAT: &str = "LOG_OUTPUT_FORMAT";

/// Environment variable enabling strict JSON escaping.
pub const ENV_ESCAPE_JSON: &str = "LOG_ESCAPE_JSON";

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Severity threshold: debug, info, warning, error, fatal (or a prefix/synonym)
    pub level: String,

    /// Record format: "plain" or "json"
    pub format: String,

    /// Encode JSON records with full escaping (slower, always valid)
    pub escape_json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "plain".to_string(),
            escape_json: false,
        }
    }
}

impl LoggingConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Override fields from a key lookup (normally the environment).
    ///
    /// Unset keys leave the field untouched. A set-but-empty severity is kept
    /// as-is so the emitter can report it.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(level) = lookup(ENV_SEVERITY_LEVEL) {
            self.level = level;
        }
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            self.format = format;
        }
        if let Some(escape) = lookup(ENV_ESCAPE_JSON) {
            self.escape_json = parse_flag(&escape);
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
