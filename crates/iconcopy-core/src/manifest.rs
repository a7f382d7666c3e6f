//! Icon pack manifest: `{ "icons": [ { "filename": ..., "name": ... }, ... ] }`.
//!
//! The document is parsed as a whole, but entries are validated one at a time
//! so a single malformed entry does not fail the run.

use crate::error::{EntryError, ManifestError};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level document shape. Unknown keys next to `icons` are ignored.
#[derive(Debug, Deserialize)]
struct ManifestDocument {
    icons: Vec<Value>,
}

/// A loaded manifest with its entries kept in document order.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    entries: Vec<Value>,
}

/// One validated manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Position in the `icons` array (0-based).
    pub index: usize,
    /// Source file identifier; only its basename is used.
    pub filename: String,
    /// Logical name; the destination is `<name><extension>`.
    pub name: String,
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let data = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = Manifest::from_json(path, &data)?;
    tracing::debug!(
        path = %path.display(),
        entries = manifest.len(),
        "loaded manifest"
    );
    Ok(manifest)
}

impl Manifest {
    /// Parse manifest JSON. `path` is only used for error messages.
    pub fn from_json(path: &Path, data: &str) -> Result<Self, ManifestError> {
        let doc: ManifestDocument =
            serde_json::from_str(data).map_err(|source| ManifestError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Manifest {
            path: path.to_path_buf(),
            entries: doc.icons,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validated entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = Result<IconEntry, EntryError>> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, value)| IconEntry::from_value(index, value))
    }
}

impl IconEntry {
    /// Validate one raw manifest value: an object with non-empty string
    /// `filename` and `name` fields.
    pub fn from_value(index: usize, value: &Value) -> Result<Self, EntryError> {
        let malformed = |reason: String| EntryError::Malformed { index, reason };
        let obj = value
            .as_object()
            .ok_or_else(|| malformed(format!("expected an object, got {}", json_kind(value))))?;
        let filename = required_str(obj, "filename").map_err(malformed)?;
        let name = required_str(obj, "name").map_err(malformed)?;
        Ok(IconEntry {
            index,
            filename: filename.to_string(),
            name: name.to_string(),
        })
    }
}

fn required_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str, String> {
    match obj.get(key) {
        None => Err(format!("missing `{key}`")),
        Some(Value::String(s)) if s.is_empty() => Err(format!("`{key}` is empty")),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(format!("`{key}` must be a string, got {}", json_kind(other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
