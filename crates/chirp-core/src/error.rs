//! Error types for chirp.
//!
//! None of these ever escape `Logger::emit`; they surface from the parsing
//! helpers, the config loader, and the escaped JSON encoder, and are turned
//! into degraded log lines by the emitter.

use thiserror::Error;

/// Top-level error type for chirp operations.
#[derive(Error, Debug)]
pub enum ChirpError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Severity text could not be resolved
    #[error(transparent)]
    Severity(#[from] ParseSeverityError),

    /// Output format name was not recognized
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Record rendering errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to resolve a severity name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSeverityError {
    /// Input was empty after trimming
    #[error("empty severity level")]
    Empty,

    /// Input is not a prefix of any known mnemonic
    #[error("unknown severity level {0}")]
    Unknown(String),

    /// Input is a prefix of mnemonics belonging to different severities
    #[error("ambiguous severity level {input} (matches {})", .candidates.join(", "))]
    Ambiguous {
        input: String,
        candidates: Vec<&'static str>,
    },
}

/// Failure to resolve an output format name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("unknown format given: {0}")]
    Unknown(String),
}

/// Record rendering errors.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The structured JSON encoder rejected the record
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Convenience type alias for chirp results.
pub type Result<T> = std::result::Result<T, ChirpError>;
