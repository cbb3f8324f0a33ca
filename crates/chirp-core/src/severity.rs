//! Severity levels and severity-name parsing.

use crate::error::ParseSeverityError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Log severity, ordered from least to most important.
///
/// Filtering compares severities with this order; a record is emitted when
/// its severity is greater than or equal to the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Fatal = 4,
}

/// Recognized mnemonics, canonical names first.
const MNEMONICS: &[(&str, Severity)] = &[
    ("debug", Severity::Debug),
    ("verbose", Severity::Debug),
    ("info", Severity::Info),
    ("normal", Severity::Info),
    ("warning", Severity::Warning),
    ("error", Severity::Error),
    ("fatal", Severity::Fatal),
    ("critical", Severity::Fatal),
];

impl Severity {
    /// All severities in ascending order.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Text written into emitted records.
    ///
    /// `Fatal` is displayed as `critical`; every other level uses its name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "critical",
        }
    }

    /// Canonical configuration name (`fatal` rather than its display alias).
    pub fn name(&self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            other => other.as_str(),
        }
    }

    pub(crate) fn from_repr(value: u8) -> Self {
        match value {
            0 => Severity::Debug,
            1 => Severity::Info,
            2 => Severity::Warning,
            3 => Severity::Error,
            _ => Severity::Fatal,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_severity(s)
    }
}

/// Resolve free-form severity text.
///
/// Input is trimmed and lower-cased, then matched against the mnemonics
/// `debug|verbose`, `info|normal`, `warning`, `error`, `fatal|critical`.
/// Any non-empty prefix of a mnemonic resolves to its severity, so `d`,
/// `deb` and `debug` all mean [`Severity::Debug`]. An exact match always wins;
/// a prefix shared by mnemonics of different severities is rejected as
/// ambiguous.
pub fn parse_severity(text: &str) -> Result<Severity, ParseSeverityError> {
    resolve(text, MNEMONICS)
}

fn resolve(text: &str, table: &[(&str, Severity)]) -> Result<Severity, ParseSeverityError> {
    let input = text.trim().to_lowercase();
    if input.is_empty() {
        return Err(ParseSeverityError::Empty);
    }

    if let Some((_, severity)) = table.iter().find(|(mnemonic, _)| *mnemonic == input) {
        return Ok(*severity);
    }

    let mut matched: Vec<Severity> = Vec::new();
    for (mnemonic, severity) in table {
        if mnemonic.starts_with(&input) && !matched.contains(severity) {
            matched.push(*severity);
        }
    }

    match matched.as_slice() {
        [] => Err(ParseSeverityError::Unknown(text.to_string())),
        [severity] => Ok(*severity),
        _ => Err(ParseSeverityError::Ambiguous {
            input: text.trim().to_string(),
            candidates: matched.iter().map(Severity::name).collect(),
        }),
    }
}
