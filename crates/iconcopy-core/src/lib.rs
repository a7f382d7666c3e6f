//! Core of `iconcopy`: load an icon pack manifest and copy each listed SVG
//! into a target directory under its logical name.

pub mod config;
pub mod logging;

pub mod checksum;
pub mod copier;
pub mod error;
pub mod manifest;
pub mod paths;
pub mod report;

pub use copier::{Copier, CopyOptions};
pub use error::{CopyError, EntryError, FailureKind, ManifestError, PathError};
pub use manifest::{load_manifest, IconEntry, Manifest};
pub use report::{CopyReport, Outcome, OutcomeSink, StdoutSink};
