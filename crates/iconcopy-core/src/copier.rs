//! Copy executor: one file copy per manifest entry, failures isolated per entry.
//!
//! Entries are processed in manifest order on the calling thread. Only
//! creating the target directory is fatal; every other fault becomes an
//! [`Outcome`] and the run moves on to the next entry.

use crate::checksum;
use crate::config::IconCopyConfig;
use crate::error::{CopyError, FailureKind};
use crate::manifest::{IconEntry, Manifest};
use crate::paths;
use crate::report::{CopyReport, Outcome, OutcomeSink};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Settings for one copy run.
#[derive(Debug, Clone)]
pub struct CopyOptions {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub extension: String,
    /// Resolve and check sources, but write nothing.
    pub dry_run: bool,
    /// Compare SHA-256 of source and destination after each copy.
    pub verify: bool,
}

impl CopyOptions {
    pub fn from_config(cfg: &IconCopyConfig) -> Self {
        Self {
            source_dir: cfg.source_dir.clone(),
            target_dir: cfg.target_dir.clone(),
            extension: cfg.extension.clone(),
            dry_run: false,
            verify: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

pub struct Copier {
    options: CopyOptions,
}

impl Copier {
    pub fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Create the target directory and its parents. Existing contents are kept.
    pub fn prepare_target(&self) -> Result<(), CopyError> {
        let path = &self.options.target_dir;
        fs::create_dir_all(path).map_err(|source| CopyError::TargetDir {
            path: path.clone(),
            source,
        })
    }

    /// Process every manifest entry, emitting each outcome to `sink` as it happens.
    pub fn run(
        &self,
        manifest: &Manifest,
        sink: &mut dyn OutcomeSink,
    ) -> Result<CopyReport, CopyError> {
        if !self.options.dry_run {
            self.prepare_target()?;
        }

        let mut report = CopyReport::default();
        for entry in manifest.entries() {
            let outcome = match entry {
                Ok(entry) => self.copy_entry(&entry),
                Err(err) => Outcome::from(err),
            };
            log_outcome(&outcome);
            sink.emit(&outcome);
            report.push(outcome);
        }
        Ok(report)
    }

    /// Resolve paths for one entry and copy (or, in a dry run, check) it.
    pub fn copy_entry(&self, entry: &IconEntry) -> Outcome {
        let source = match paths::source_path(&self.options.source_dir, &entry.filename) {
            Ok(p) => p,
            Err(err) => {
                return Outcome::Malformed {
                    index: entry.index,
                    reason: err.to_string(),
                }
            }
        };

        let target_dir = &self.options.target_dir;
        let extension = &self.options.extension;
        let destination = match paths::destination_path(target_dir, &entry.name, extension) {
            Ok(p) => p,
            Err(err) => {
                return Outcome::Failed {
                    source,
                    destination: target_dir
                        .join(paths::destination_file_name(&entry.name, extension)),
                    kind: FailureKind::InvalidDestination,
                    detail: err.to_string(),
                }
            }
        };

        if self.options.dry_run {
            return plan(source, destination);
        }

        if is_same_file(&source, &destination) {
            return same_file_failure(source, destination);
        }

        match fs::copy(&source, &destination) {
            Ok(bytes) => {
                if self.options.verify {
                    if let Some(failure) = verify_copy(&source, &destination) {
                        return failure;
                    }
                }
                Outcome::Copied {
                    source,
                    destination,
                    bytes,
                }
            }
            // A missing target directory also reports NotFound; only blame the source if it is gone.
            Err(err) if err.kind() == io::ErrorKind::NotFound && !source.exists() => {
                Outcome::NotFound { source }
            }
            Err(err) => Outcome::Failed {
                kind: FailureKind::from_io(&err),
                detail: err.to_string(),
                source,
                destination,
            },
        }
    }
}

fn plan(source: PathBuf, destination: PathBuf) -> Outcome {
    match fs::metadata(&source) {
        Ok(meta) if !meta.is_file() => Outcome::Failed {
            kind: FailureKind::Io,
            detail: "source is not a regular file".to_string(),
            source,
            destination,
        },
        Ok(_) if is_same_file(&source, &destination) => same_file_failure(source, destination),
        Ok(_) => Outcome::Planned {
            source,
            destination,
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => Outcome::NotFound { source },
        Err(err) => Outcome::Failed {
            kind: FailureKind::from_io(&err),
            detail: err.to_string(),
            source,
            destination,
        },
    }
}

/// True if both paths name the same existing file (including through links).
///
/// `fs::copy` truncates the destination before reading the source, so copying a
/// file onto itself would empty it.
fn is_same_file(a: &Path, b: &Path) -> bool {
    let (Ok(ma), Ok(mb)) = (fs::metadata(a), fs::metadata(b)) else {
        return false;
    };
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        ma.dev() == mb.dev() && ma.ino() == mb.ino()
    }
    #[cfg(not(unix))]
    {
        let _ = (ma, mb);
        matches!(
            (fs::canonicalize(a), fs::canonicalize(b)),
            (Ok(ca), Ok(cb)) if ca == cb
        )
    }
}

fn same_file_failure(source: PathBuf, destination: PathBuf) -> Outcome {
    Outcome::Failed {
        kind: FailureKind::InvalidDestination,
        detail: "source and destination are the same file".to_string(),
        source,
        destination,
    }
}

fn verify_copy(source: &Path, destination: &Path) -> Option<Outcome> {
    let (kind, detail) = match checksum::same_contents(source, destination) {
        Ok(true) => return None,
        Ok(false) => (
            FailureKind::VerifyMismatch,
            "checksum mismatch after copy".to_string(),
        ),
        Err(err) => (FailureKind::Io, format!("verify failed: {err:#}")),
    };
    Some(Outcome::Failed {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
        kind,
        detail,
    })
}

fn log_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Copied {
            source,
            destination,
            bytes,
        } => tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            bytes,
            "copied icon"
        ),
        Outcome::Planned {
            source,
            destination,
        } => tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            "dry run: would copy icon"
        ),
        Outcome::NotFound { source } => {
            tracing::warn!(source = %source.display(), "source icon not found")
        }
        Outcome::Failed {
            source,
            kind,
            detail,
            ..
        } => tracing::warn!(
            source = %source.display(),
            kind = kind.as_str(),
            "copy failed: {}",
            detail
        ),
        Outcome::Malformed { index, reason } => {
            tracing::warn!(index, "skipping malformed manifest entry: {}", reason)
        }
    }
}
