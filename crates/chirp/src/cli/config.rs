//! The `chirp config` command for configuration management.

use chirp_core::Config;
use clap::{Args, Subcommand};
use std::path::Path;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration (file plus LOG_* overrides)
    Show,

    /// Show config file path
    Path,

    /// Initialize a new config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_path);

    match args.command {
        ConfigCommand::Show => {
            let config = super::load_config(Some(path.as_path())).with_env();
            println!("{}", config.to_toml()?);
        }

        ConfigCommand::Path => {
            println!("{}", path.display());
        }

        ConfigCommand::Init { force } => {
            init_config(&path, force)?;
            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Write the default configuration to `path`.
pub(crate) fn init_config(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at: {}\nUse --force to overwrite.",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = Config::default().to_toml()?;
    std::fs::write(path, toml)?;
    Ok(())
}
