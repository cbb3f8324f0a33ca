//! Output format selection.

use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// Encoding used for emitted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Tab-delimited text, one record per line
    #[default]
    Plain,
    /// One JSON object per record
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }

    /// Lenient parse used at initialization.
    ///
    /// `json` (case-insensitive, trimmed) selects JSON; anything else,
    /// including an empty value, selects plain text.
    pub fn from_config_value(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Plain
        }
    }

    /// Strict parse used by named setters: only `json` and `plain` are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "plain" => Some(Self::Plain),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FormatError::Unknown(s.to_string()))
    }
}
