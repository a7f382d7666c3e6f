//! `iconcopy config` – show the configuration a run would use.

use anyhow::Result;
use std::process::ExitCode;

use crate::cli::PathArgs;

pub fn run_config(args: &PathArgs) -> Result<ExitCode> {
    let cfg = args.resolve_config()?;
    print!("{}", cfg.to_toml()?);
    Ok(ExitCode::SUCCESS)
}
