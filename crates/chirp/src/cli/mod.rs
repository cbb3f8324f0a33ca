//! Subcommand implementations.

pub mod config;
pub mod emit;
pub mod level;

use chirp_core::Config;
use std::path::Path;

/// Load config from `path` (or the default location), falling back to
/// defaults with a warning when the file is unreadable or not valid TOML.
///
/// Level and format values are not checked here; the emitter resolves them.
pub(crate) fn load_config(path: Option<&Path>) -> Config {
    let loaded = match path {
        Some(path) if path.exists() => Config::load_from(path),
        Some(path) => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        None => Config::load(),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Failed to load config: {e}. Using default configuration. \
                 Check your config file with `chirp config path`."
            );
            Config::default()
        }
    }
}
