//! Per-entry outcomes, the console line for each, and the run summary.

use crate::error::{EntryError, FailureKind};
use std::fmt;
use std::path::PathBuf;

/// Result of processing one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copied {
        source: PathBuf,
        destination: PathBuf,
        bytes: u64,
    },
    NotFound {
        source: PathBuf,
    },
    Failed {
        source: PathBuf,
        destination: PathBuf,
        kind: FailureKind,
        detail: String,
    },
    Malformed {
        index: usize,
        reason: String,
    },
    /// Dry run: the copy would happen.
    Planned {
        source: PathBuf,
        destination: PathBuf,
    },
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Outcome::NotFound { .. } | Outcome::Failed { .. } | Outcome::Malformed { .. }
        )
    }
}

impl From<EntryError> for Outcome {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::Malformed { index, reason } => Outcome::Malformed { index, reason },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Copied {
                source,
                destination,
                ..
            } => write!(
                f,
                "Copied: {} -> {}",
                source.display(),
                destination.display()
            ),
            Outcome::NotFound { source } => write!(f, "File not found: {}", source.display()),
            Outcome::Failed {
                source,
                destination,
                detail,
                ..
            } => write!(
                f,
                "Error copying {} to {}: {}",
                source.display(),
                destination.display(),
                detail
            ),
            Outcome::Malformed { index, reason } => {
                write!(f, "Skipping malformed entry #{}: {}", index, reason)
            }
            Outcome::Planned {
                source,
                destination,
            } => write!(
                f,
                "Would copy: {} -> {}",
                source.display(),
                destination.display()
            ),
        }
    }
}

/// Receives each outcome as soon as its entry is processed.
pub trait OutcomeSink {
    fn emit(&mut self, outcome: &Outcome);
}

/// Prints one line per outcome to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutcomeSink for StdoutSink {
    fn emit(&mut self, outcome: &Outcome) {
        println!("{outcome}");
    }
}

/// Collects the rendered lines (used by tests and callers that buffer output).
impl OutcomeSink for Vec<String> {
    fn emit(&mut self, outcome: &Outcome) {
        self.push(outcome.to_string());
    }
}

/// All outcomes of one run, in manifest order.
#[derive(Debug, Clone, Default)]
pub struct CopyReport {
    pub outcomes: Vec<Outcome>,
}

impl CopyReport {
    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn copied(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Copied { .. }))
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| matches!(o, Outcome::NotFound { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed { .. }))
    }

    pub fn malformed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Malformed { .. }))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Planned { .. }))
    }

    /// True if any entry was not copied (or would not be, in a dry run).
    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(Outcome::is_failure)
    }

    /// One-line summary printed after the outcome lines.
    pub fn summary(&self) -> String {
        let planned = self.planned();
        let head = if planned > 0 {
            format!("{} to copy", planned)
        } else {
            format!("{} copied", self.copied())
        };
        format!(
            "Summary: {}, {} not found, {} failed, {} malformed ({} entries)",
            head,
            self.not_found(),
            self.failed(),
            self.malformed(),
            self.total()
        )
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}
