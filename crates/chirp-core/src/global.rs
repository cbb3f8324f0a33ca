//! The shared process-wide logger and its free-function call surface.
//!
//! The logger is created on first use from the environment and lives for the
//! rest of the process. Applications that want a different configuration call
//! [`install`] before anything logs.

use crate::attachment::Attachments;
use crate::format::OutputFormat;
use crate::logger::Logger;
use crate::severity::Severity;
use once_cell::sync::OnceCell;
use std::fmt;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// The shared logger, initialized from the environment on first call.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::from_env)
}

/// Install `logger` as the shared logger.
///
/// Fails, handing the logger back, if the shared logger already exists.
pub fn install(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}

pub fn set_severity(severity: Severity) {
    global().set_severity(severity);
}

pub fn set_severity_named(text: &str) {
    global().set_severity_named(text);
}

pub fn severity() -> Severity {
    global().severity()
}

pub fn set_output_format(format: OutputFormat) {
    global().set_output_format(format);
}

pub fn set_output_format_named(name: &str) {
    global().set_output_format_named(name);
}

pub fn output_format() -> OutputFormat {
    global().output_format()
}

pub fn set_escape_json(enabled: bool) {
    global().set_escape_json(enabled);
}

/// Most recent record written by the shared logger.
pub fn last_record() -> String {
    global().last_record()
}

pub fn emit(severity: Severity, message: &str, attachments: Option<&Attachments>) {
    global().emit(severity, message, attachments);
}

pub fn debug(message: &str) {
    global().debug(message);
}

pub fn info(message: &str) {
    global().info(message);
}

pub fn warn(message: &str) {
    global().warn(message);
}

pub fn error(message: &str) {
    global().error(message);
}

pub fn fatal(message: &str) {
    global().fatal(message);
}

pub fn debug_kv(message: &str, attachments: &Attachments) {
    global().debug_kv(message, attachments);
}

pub fn info_kv(message: &str, attachments: &Attachments) {
    global().info_kv(message, attachments);
}

pub fn warn_kv(message: &str, attachments: &Attachments) {
    global().warn_kv(message, attachments);
}

pub fn error_kv(message: &str, attachments: &Attachments) {
    global().error_kv(message, attachments);
}

pub fn fatal_kv(message: &str, attachments: &Attachments) {
    global().fatal_kv(message, attachments);
}

pub fn error_err(err: &dyn fmt::Display) {
    global().error_err(err);
}

pub fn fatal_err(err: &dyn fmt::Display) {
    global().fatal_err(err);
}

pub fn error_return<E: fmt::Display>(err: E) -> E {
    global().error_return(err)
}
