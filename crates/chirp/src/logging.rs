//! Diagnostics for the CLI itself.
//!
//! Uses the `tracing` ecosystem on stderr so stdout carries only the records
//! the user asked for.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the diagnostics subscriber.
///
/// # Arguments
///
/// * `verbose` - If true, enables DEBUG level; otherwise WARN level.
/// * `json_format` - If true, outputs JSON diagnostics; otherwise pretty-printed.
///
/// The RUST_LOG environment variable overrides the level.
pub fn init(verbose: bool, json_format: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}
