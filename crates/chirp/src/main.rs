//! Chirp CLI - emit leveled plain-text or JSON log records from the shell.
//!
//! Useful in scripts that want the same record format as Rust services using
//! `chirp-core`.
//!
//! # Usage
//!
//! ```bash
//! # Emit a record (threshold and format from config / LOG_* variables)
//! chirp emit info "database connected"
//!
//! # Attach structured values
//! chirp emit error "failed" --kv code=500 --kv user=42 --format json
//!
//! # Check how a severity name resolves
//! chirp level deb
//!
//! # View configuration
//! chirp config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Chirp - leveled, timestamped log records for stdout.
#[derive(Parser, Debug)]
#[command(name = "chirp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output diagnostics in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "CHIRP_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Emit one log record to stdout
    Emit(cli::emit::EmitArgs),

    /// Resolve a severity name (prefixes and synonyms allowed)
    Level(cli::level::LevelArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json_logs);

    tracing::debug!("chirp v{}", chirp_core::VERSION);

    let config_path = cli.config.as_deref().map(chirp_core::Config::expand_path);

    match cli.command {
        Commands::Emit(args) => cli::emit::execute(args, config_path.as_deref()),
        Commands::Level(args) => cli::level::execute(args),
        Commands::Config(args) => cli::config::execute(args, config_path.as_deref()),
    }
}
