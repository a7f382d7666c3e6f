//! Diagnostic logging for a copy run.
//!
//! Events go to `$XDG_STATE_HOME/iconcopy/iconcopy.log`; if that file cannot be
//! opened the CLI falls back to a quieter stderr subscriber. Outcome lines
//! always go to stdout, not here.

use anyhow::Result;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "iconcopy.log";
const FILE_FILTER: &str = "info,iconcopy=debug,iconcopy_core=debug";
/// Stderr shares the terminal with the outcome lines.
const STDERR_FILTER: &str = "warn";

/// Per-event writer: a handle on the log file, or stderr if the handle could not be duplicated.
enum LogTarget {
    File(File),
    Stderr,
}

impl Write for LogTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogTarget::File(f) => f.write(buf),
            LogTarget::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogTarget::File(f) => f.flush(),
            LogTarget::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogTarget;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogTarget::File)
            .unwrap_or(LogTarget::Stderr)
    }
}

/// `RUST_LOG` if set and valid, otherwise `default`.
fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Install the file subscriber. Errors leave no subscriber installed so the
/// caller can use [`init_logging_stderr`] instead.
pub fn init_logging() -> Result<()> {
    let log_path: PathBuf =
        xdg::BaseDirectories::with_prefix("iconcopy")?.place_state_file(LOG_FILE_NAME)?;
    let file = open_log_file(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_or(FILE_FILTER))
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .init();

    tracing::info!("iconcopy logging to {}", log_path.display());
    Ok(())
}

pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or(STDERR_FILTER))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
