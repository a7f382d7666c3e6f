//! `iconcopy checksum <path>` – print SHA-256 of a file.

use anyhow::Result;
use iconcopy_core::checksum;
use std::path::Path;
use std::process::ExitCode;

pub fn run_checksum(path: &Path) -> Result<ExitCode> {
    let digest = checksum::sha256_path(path)?;
    println!("{}  {}", digest, path.display());
    Ok(ExitCode::SUCCESS)
}
