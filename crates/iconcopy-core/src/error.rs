//! Error types for manifest loading, path resolution and the copy run.
//!
//! Two tiers: `ManifestError` and `CopyError` are fatal and stop the run before
//! any entry is copied; `EntryError`, `PathError` and `FailureKind` describe a
//! single entry and are reported without stopping the batch.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The manifest could not be read or parsed.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse manifest {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One manifest entry does not have the required shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("entry #{index}: {reason}")]
    Malformed { index: usize, reason: String },
}

/// A manifest value cannot be turned into a usable path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("filename {filename:?} has no file name component")]
    NoBasename { filename: String },
    #[error("name {name:?} is not a plain file name")]
    InvalidName { name: String },
}

/// Fatal setup failure of the copy run.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("failed to create target directory {}", .path.display())]
    TargetDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single copy failed (the source-missing case is reported separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    PermissionDenied,
    InvalidDestination,
    Io,
    VerifyMismatch,
}

impl FailureKind {
    /// Classify an I/O error raised while copying.
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => FailureKind::PermissionDenied,
            _ => FailureKind::Io,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::PermissionDenied => "permission denied",
            FailureKind::InvalidDestination => "invalid destination",
            FailureKind::Io => "i/o error",
            FailureKind::VerifyMismatch => "verify mismatch",
        }
    }
}
