//! Runtime severity/format settings shared between setters and the emitter.
//!
//! Each field is its own atomic. Readers never observe a torn value, but a
//! reader racing two setters may see the new threshold alongside the old
//! format.

use crate::format::OutputFormat;
use crate::severity::Severity;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Threshold, output format and JSON escape flag.
#[derive(Debug)]
pub struct Settings {
    severity: AtomicU8,
    json: AtomicBool,
    escape_json: AtomicBool,
}

impl Settings {
    pub fn new(severity: Severity, format: OutputFormat, escape_json: bool) -> Self {
        Self {
            severity: AtomicU8::new(severity as u8),
            json: AtomicBool::new(format == OutputFormat::Json),
            escape_json: AtomicBool::new(escape_json),
        }
    }

    /// Minimum severity that will be emitted.
    pub fn severity(&self) -> Severity {
        Severity::from_repr(self.severity.load(Ordering::Relaxed))
    }

    pub fn set_severity(&self, severity: Severity) {
        self.severity.store(severity as u8, Ordering::Relaxed);
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json.load(Ordering::Relaxed) {
            OutputFormat::Json
        } else {
            OutputFormat::Plain
        }
    }

    pub fn set_output_format(&self, format: OutputFormat) {
        self.json
            .store(format == OutputFormat::Json, Ordering::Relaxed);
    }

    /// Whether JSON records go through the structured encoder.
    pub fn escape_json(&self) -> bool {
        self.escape_json.load(Ordering::Relaxed)
    }

    /// Toggle strict JSON escaping.
    ///
    /// Off by default: the string-built encoder is considerably faster but
    /// produces invalid JSON when text contains quotes or control characters.
    pub fn set_escape_json(&self, enabled: bool) {
        self.escape_json.store(enabled, Ordering::Relaxed);
    }

    /// Whether a record at `severity` passes the threshold (inclusive).
    pub fn enabled(&self, severity: Severity) -> bool {
        severity >= self.severity()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(Severity::Info, OutputFormat::Plain, false)
    }
}
