//! `iconcopy run` – copy every icon in the manifest to the target directory.

use anyhow::{Context, Result};
use iconcopy_core::{load_manifest, Copier, CopyOptions, StdoutSink};
use std::process::ExitCode;

use crate::cli::RunArgs;

/// Exit status for `--strict` when at least one entry was not copied.
const EXIT_PARTIAL: u8 = 2;

pub fn run_copy(args: &RunArgs) -> Result<ExitCode> {
    let cfg = args.paths.resolve_config()?;
    tracing::info!(
        manifest = %cfg.manifest.display(),
        source_dir = %cfg.source_dir.display(),
        target_dir = %cfg.target_dir.display(),
        dry_run = args.dry_run,
        "starting icon copy"
    );

    let manifest = load_manifest(&cfg.manifest)?;
    let options = CopyOptions::from_config(&cfg)
        .dry_run(args.dry_run)
        .verify(args.verify);

    let mut sink = StdoutSink;
    let report = Copier::new(options)
        .run(&manifest, &mut sink)
        .context("icon copy aborted")?;

    let summary = report.summary();
    tracing::info!("{}", summary);
    if !args.quiet_summary {
        println!("{summary}");
    }

    if args.strict && report.has_failures() {
        return Ok(ExitCode::from(EXIT_PARTIAL));
    }
    Ok(ExitCode::SUCCESS)
}
