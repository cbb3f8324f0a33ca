//! The record emitter.
//!
//! [`Logger::emit`] filters, renders, caches and writes one record per call.
//! It never returns an error: rendering failures degrade to the string-built
//! encoder plus a separate internal-error line, and sink failures are reported
//! through `tracing` only.

use crate::attachment::Attachments;
use crate::config::LoggingConfig;
use crate::error::FormatError;
use crate::exit::{ProcessExit, Terminate, FATAL_EXIT_CODE};
use crate::format::OutputFormat;
use crate::record::{render_internal_error, timestamp_now, LogRecord};
use crate::settings::Settings;
use crate::severity::{parse_severity, Severity};
use crate::sink::{Sink, Stdout};
use parking_lot::Mutex;
use std::fmt;

/// Leveled record emitter with its own settings and last-record cache.
pub struct Logger {
    settings: Settings,
    last_record: Mutex<String>,
    sink: Box<dyn Sink>,
    terminator: Box<dyn Terminate>,
}

impl Logger {
    /// Logger writing to stdout and exiting the process on fatal records.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            last_record: Mutex::new(String::new()),
            sink: Box::new(Stdout),
            terminator: Box::new(ProcessExit),
        }
    }

    /// Replace the output sink.
    pub fn with_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replace the action taken after a fatal record.
    pub fn with_terminator(mut self, terminator: impl Terminate + 'static) -> Self {
        self.terminator = Box::new(terminator);
        self
    }

    /// Stdout logger initialized from configuration values.
    pub fn from_config(config: &LoggingConfig) -> Self {
        let logger = Self::new(Settings::default());
        logger.configure(config);
        logger
    }

    /// Stdout logger initialized from `LOG_SEVERITY_LEVEL`, `LOG_OUTPUT_FORMAT`
    /// and `LOG_ESCAPE_JSON`.
    pub fn from_env() -> Self {
        Self::from_config(&LoggingConfig::from_env())
    }

    /// Apply configuration values to this logger.
    ///
    /// The format is applied first so that a severity parse error is reported
    /// in the configured format. An unparseable severity is logged at `error`
    /// and the current threshold is kept.
    pub fn configure(&self, config: &LoggingConfig) {
        self.settings
            .set_output_format(OutputFormat::from_config_value(&config.format));
        self.settings.set_escape_json(config.escape_json);

        match parse_severity(&config.level) {
            Ok(severity) => self.settings.set_severity(severity),
            Err(e) => self.error_err(&e),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn severity(&self) -> Severity {
        self.settings.severity()
    }

    pub fn set_severity(&self, severity: Severity) {
        self.settings.set_severity(severity);
    }

    /// Set the threshold from free-form text, keeping the current one on failure.
    pub fn set_severity_named(&self, text: &str) {
        match parse_severity(text) {
            Ok(severity) => self.settings.set_severity(severity),
            Err(e) => self.error_err(&e),
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        self.settings.output_format()
    }

    pub fn set_output_format(&self, format: OutputFormat) {
        self.settings.set_output_format(format);
    }

    /// Set the format by exact name (`json` or `plain`), reporting unknown names.
    pub fn set_output_format_named(&self, name: &str) {
        match OutputFormat::parse(name) {
            Some(format) => self.settings.set_output_format(format),
            None => self.error_err(&FormatError::Unknown(name.to_string())),
        }
    }

    pub fn escape_json(&self) -> bool {
        self.settings.escape_json()
    }

    pub fn set_escape_json(&self, enabled: bool) {
        self.settings.set_escape_json(enabled);
    }

    /// The most recently emitted record, exactly as rendered.
    pub fn last_record(&self) -> String {
        self.last_record.lock().clone()
    }

    /// Emit one record.
    ///
    /// Nothing happens when both the message and the attachments are empty or
    /// when `severity` is below the threshold. A fatal record invokes the
    /// terminator after it has been written.
    pub fn emit(&self, severity: Severity, message: &str, attachments: Option<&Attachments>) {
        if self.publish(severity, message, attachments) && severity == Severity::Fatal {
            self.terminator.terminate(FATAL_EXIT_CODE);
        }
    }

    /// Emit a formatted message; formatting is skipped for filtered records.
    ///
    /// At fatal this behaves like [`Logger::fatal`] and always terminates.
    pub fn emit_fmt(&self, severity: Severity, args: fmt::Arguments<'_>) {
        if !self.settings.enabled(severity) {
            return;
        }
        let owned;
        let message = match args.as_str() {
            Some(message) => message,
            None => {
                owned = args.to_string();
                owned.as_str()
            }
        };
        if severity == Severity::Fatal {
            self.emit_fatal(message, None);
        } else {
            self.emit(severity, message, None);
        }
    }

    /// Render, cache and write one record. Returns false when it was skipped.
    fn publish(&self, severity: Severity, message: &str, attachments: Option<&Attachments>) -> bool {
        let has_details = attachments.is_some_and(|a| !a.is_empty());
        if message.is_empty() && !has_details {
            return false;
        }
        if !self.settings.enabled(severity) {
            return false;
        }

        let record = LogRecord::new(timestamp_now(), severity, message, attachments);
        let text = self.render(&record);

        let cached = text.clone();
        *self.last_record.lock() = cached;

        self.write(&text);
        true
    }

    /// Fatal convenience path: terminates even when nothing was written.
    fn emit_fatal(&self, message: &str, attachments: Option<&Attachments>) {
        self.publish(Severity::Fatal, message, attachments);
        self.terminator.terminate(FATAL_EXIT_CODE);
    }

    fn render(&self, record: &LogRecord<'_>) -> String {
        match self.settings.output_format() {
            OutputFormat::Plain => record.render_plain(),
            OutputFormat::Json if self.settings.escape_json() => {
                match record.render_json_escaped() {
                    Ok(text) => text,
                    Err(e) => {
                        self.internal_error(&record.timestamp, OutputFormat::Json, &e);
                        record.render_json()
                    }
                }
            }
            OutputFormat::Json => record.render_json(),
        }
    }

    /// Report a failure inside `emit` without going back through `emit`.
    fn internal_error(&self, timestamp: &str, format: OutputFormat, err: &dyn fmt::Display) {
        if !self.settings.enabled(Severity::Error) {
            return;
        }
        self.write(&render_internal_error(timestamp, format, err));
    }

    fn write(&self, text: &str) {
        if let Err(e) = self.sink.write_record(text) {
            tracing::warn!(error = %e, "failed to write log record");
        }
    }

    pub fn debug(&self, message: &str) {
        self.emit(Severity::Debug, message, None);
    }

    pub fn info(&self, message: &str) {
        self.emit(Severity::Info, message, None);
    }

    pub fn warn(&self, message: &str) {
        self.emit(Severity::Warning, message, None);
    }

    pub fn error(&self, message: &str) {
        self.emit(Severity::Error, message, None);
    }

    /// Emit at fatal, then terminate. Terminates even for an empty message.
    pub fn fatal(&self, message: &str) {
        self.emit_fatal(message, None);
    }

    pub fn debug_kv(&self, message: &str, attachments: &Attachments) {
        self.emit(Severity::Debug, message, Some(attachments));
    }

    pub fn info_kv(&self, message: &str, attachments: &Attachments) {
        self.emit(Severity::Info, message, Some(attachments));
    }

    pub fn warn_kv(&self, message: &str, attachments: &Attachments) {
        self.emit(Severity::Warning, message, Some(attachments));
    }

    pub fn error_kv(&self, message: &str, attachments: &Attachments) {
        self.emit(Severity::Error, message, Some(attachments));
    }

    pub fn fatal_kv(&self, message: &str, attachments: &Attachments) {
        self.emit_fatal(message, Some(attachments));
    }

    /// Emit an error value's message at `error`.
    pub fn error_err(&self, err: &dyn fmt::Display) {
        self.emit(Severity::Error, &err.to_string(), None);
    }

    /// Emit an error value's message at fatal, then terminate.
    pub fn fatal_err(&self, err: &dyn fmt::Display) {
        self.emit_fatal(&err.to_string(), None);
    }

    /// Log `err` at `error` and hand it back, for `return Err(log.error_return(e))`.
    pub fn error_return<E: fmt::Display>(&self, err: E) -> E {
        self.error_err(&err);
        err
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
