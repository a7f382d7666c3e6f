//! CLI for iconcopy.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use iconcopy_core::config::{self, ConfigOverrides, IconCopyConfig};
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_checksum, run_config, run_copy};

/// Top-level CLI. Without a subcommand, behaves like `iconcopy run`.
#[derive(Debug, Parser)]
#[command(name = "iconcopy", version)]
#[command(
    about = "Copy SVG icons listed in a pack manifest into a target directory as <name>.svg",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Copy every icon listed in the manifest (the default).
    Run(RunArgs),

    /// Print the effective configuration as TOML.
    Config(PathArgs),

    /// Compute SHA-256 of a file (e.g. to compare a copy with its source).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

/// Where to read the manifest and icons from, and where to write copies.
#[derive(Debug, Clone, Default, Args)]
pub struct PathArgs {
    /// Config file (default: ~/.config/iconcopy/config.toml if present).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Icon pack manifest (JSON with an `icons` array).
    #[arg(long, value_name = "FILE", env = "ICONCOPY_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Directory containing the source SVG files.
    #[arg(long, value_name = "DIR", env = "ICONCOPY_SOURCE_DIR")]
    pub source_dir: Option<PathBuf>,

    /// Directory to copy renamed icons into (created if missing).
    #[arg(long, value_name = "DIR", env = "ICONCOPY_TARGET_DIR")]
    pub target_dir: Option<PathBuf>,

    /// Extension appended to each icon name.
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
}

impl PathArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            manifest: self.manifest.clone(),
            source_dir: self.source_dir.clone(),
            target_dir: self.target_dir.clone(),
            extension: self.extension.clone(),
        }
    }

    /// Defaults, then config file, then environment and flags.
    pub fn resolve_config(&self) -> Result<IconCopyConfig> {
        let cfg = config::load(self.config.as_deref())?.with_overrides(&self.overrides());
        tracing::debug!("effective config: {:?}", cfg);
        Ok(cfg)
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub paths: PathArgs,

    /// Show what would be copied without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// Compare SHA-256 of each copy with its source.
    #[arg(long)]
    pub verify: bool,

    /// Exit with status 2 if any entry was not copied.
    #[arg(long)]
    pub strict: bool,

    /// Do not print the closing summary line.
    #[arg(long)]
    pub quiet_summary: bool,
}

impl Cli {
    pub fn run_from_args() -> Result<ExitCode> {
        Cli::parse().dispatch()
    }

    pub fn dispatch(self) -> Result<ExitCode> {
        match self.command {
            None => run_copy(&self.run),
            Some(CliCommand::Run(args)) => run_copy(&args),
            Some(CliCommand::Config(args)) => run_config(&args),
            Some(CliCommand::Checksum { path }) => run_checksum(&path),
        }
    }
}

#[cfg(test)]
mod tests;
