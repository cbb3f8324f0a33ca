//! The `chirp level` command.

use clap::Args;

/// Arguments for the `level` command.
#[derive(Args, Debug)]
pub struct LevelArgs {
    /// Severity text, e.g. `deb`, `normal`, `crit`
    pub text: String,
}

/// Print the canonical severity name `text` resolves to.
pub fn execute(args: LevelArgs) -> anyhow::Result<()> {
    let severity = chirp_core::parse_severity(&args.text)?;
    println!("{}", severity.name());
    Ok(())
}
