//! Log records and their two wire encodings.
//!
//! ```text
//! plain: <ts>\t<level>\t<msg>[,\t<key>=<value>]...\n
//! json:  {"ts":"<ts>","level":"<level>","msg":"<msg>"[,"details":{...}]}
//! ```

use crate::attachment::Attachments;
use crate::error::RenderError;
use crate::format::OutputFormat;
use crate::severity::Severity;
use chrono::{Local, SecondsFormat};
use serde::Serialize;
use std::fmt;

/// Current local time as RFC3339 with second precision (`Z` when UTC).
pub fn timestamp_now() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// One log event, built per call and discarded after rendering.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord<'a> {
    #[serde(rename = "ts")]
    pub timestamp: String,

    #[serde(rename = "level")]
    pub severity: Severity,

    #[serde(rename = "msg")]
    pub message: &'a str,

    #[serde(rename = "details", skip_serializing_if = "has_no_details")]
    pub attachments: Option<&'a Attachments>,
}

fn has_no_details(attachments: &Option<&Attachments>) -> bool {
    attachments.map_or(true, Attachments::is_empty)
}

impl<'a> LogRecord<'a> {
    pub fn new(
        timestamp: String,
        severity: Severity,
        message: &'a str,
        attachments: Option<&'a Attachments>,
    ) -> Self {
        Self {
            timestamp,
            severity,
            message,
            attachments,
        }
    }

    fn details(&self) -> Option<&'a Attachments> {
        self.attachments.filter(|a| !a.is_empty())
    }

    /// Tab-delimited text terminated by a newline.
    pub fn render_plain(&self) -> String {
        let mut out = String::with_capacity(self.timestamp.len() + self.message.len() + 16);
        out.push_str(&self.timestamp);
        out.push('\t');
        out.push_str(self.severity.as_str());
        out.push('\t');
        out.push_str(self.message);

        if let Some(details) = self.details() {
            for (key, value) in details.iter() {
                out.push_str(",\t");
                out.push_str(key);
                out.push('=');
                out.push_str(&value.to_string());
            }
        }

        out.push('\n');
        out
    }

    /// String-built JSON with no escaping of message or text values.
    ///
    /// Fast, but a quote or control character in the message or a text
    /// attachment yields invalid JSON. Use [`render_json_escaped`] when
    /// content is untrusted.
    ///
    /// [`render_json_escaped`]: LogRecord::render_json_escaped
    pub fn render_json(&self) -> String {
        let mut out = String::with_capacity(self.timestamp.len() + self.message.len() + 48);
        out.push_str("{\"ts\":\"");
        out.push_str(&self.timestamp);
        out.push_str("\",\"level\":\"");
        out.push_str(self.severity.as_str());
        out.push_str("\",\"msg\":\"");
        out.push_str(self.message);
        out.push('"');

        if let Some(details) = self.details() {
            out.push_str(",\"details\":{");
            for (i, (key, value)) in details.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('"');
                out.push_str(key);
                out.push_str("\":");
                value.write_json_unescaped(&mut out);
            }
            out.push('}');
        }

        out.push('}');
        out
    }

    /// Standards-compliant JSON produced by `serde_json`.
    pub fn render_json_escaped(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Minimal error line for failures inside the emitter itself.
///
/// Plain concatenation only, so it cannot fail and never re-enters the
/// encoder.
pub(crate) fn render_internal_error(
    timestamp: &str,
    format: OutputFormat,
    err: &dyn fmt::Display,
) -> String {
    let level = Severity::Error.as_str();
    match format {
        OutputFormat::Json => {
            format!("{{\"ts\":\"{timestamp}\",\"level\":\"{level}\",\"msg\":\"{err}\"}}")
        }
        OutputFormat::Plain => format!("{timestamp}\t{level}\t{err}\n"),
    }
}
