//! Chirp Core - leveled, timestamped log records for standard output.
//!
//! Each call renders one record, either as tab-delimited text or as a JSON
//! object, optionally carrying structured key-value attachments, and writes it
//! synchronously to stdout. Records below the configured severity threshold
//! are dropped.
//!
//! ```text
//! 2024-01-02T15:04:05+01:00	error	failed,	code=500,	user=42
//! {"ts":"2024-01-02T15:04:05+01:00","level":"error","msg":"failed","details":{"code":500,"user":42}}
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use chirp_core::{attachments, Severity};
//!
//! chirp_core::set_severity(Severity::Debug);
//! chirp_core::info!("user {} changed its password", 10);
//! chirp_core::error_kv("upstream failed", &attachments! { "code" => 500 });
//! ```
//!
//! The shared logger reads `LOG_SEVERITY_LEVEL`, `LOG_OUTPUT_FORMAT` and
//! `LOG_ESCAPE_JSON` on first use. Independent [`Logger`] instances can be
//! built for tests or embedding.

// Module declarations
pub mod attachment;
pub mod config;
pub mod error;
pub mod exit;
pub mod format;
pub mod global;
mod macros;
pub mod logger;
pub mod record;
pub mod settings;
pub mod severity;
pub mod sink;

// Re-exports for convenient access
pub use attachment::{AttachmentValue, Attachments};
pub use config::{Config, LoggingConfig};
pub use error::{ChirpError, ConfigError, FormatError, ParseSeverityError, RenderError, Result};
pub use exit::{ProcessExit, Terminate, FATAL_EXIT_CODE};
pub use format::OutputFormat;
pub use global::*;
pub use logger::Logger;
pub use record::LogRecord;
pub use settings::Settings;
pub use severity::{parse_severity, Severity};
pub use sink::{MemorySink, Sink, Stdout};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
