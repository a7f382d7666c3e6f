//! SHA-256 helpers for verifying copies.
//!
//! Checksums are computed on demand (`--verify`, `iconcopy checksum`), never
//! on the plain copy path.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// True if both files have the same SHA-256 digest.
pub fn same_contents(a: &Path, b: &Path) -> Result<bool> {
    Ok(sha256_path(a)? == sha256_path(b)?)
}
