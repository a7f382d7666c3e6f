//! Source and destination path derivation for icon entries.

use crate::error::PathError;
use std::path::{Path, PathBuf};

/// Host path separators. Outside Windows `\` is an ordinary file name character.
fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Last path component of a manifest `filename`.
///
/// Returns `None` for an empty final component, `.` or `..`.
pub fn basename(filename: &str) -> Option<&str> {
    let last = filename.rsplit(is_separator).next()?;
    if last.is_empty() || last == "." || last == ".." {
        return None;
    }
    Some(last)
}

/// `source_dir/<basename of filename>`. Any directory part of `filename` is discarded.
pub fn source_path(source_dir: &Path, filename: &str) -> Result<PathBuf, PathError> {
    let base = basename(filename).ok_or_else(|| PathError::NoBasename {
        filename: filename.to_string(),
    })?;
    Ok(source_dir.join(base))
}

/// Destination file name: `<name><extension>`, e.g. `github` + `.svg`.
pub fn destination_file_name(name: &str, extension: &str) -> String {
    format!("{name}{extension}")
}

/// `target_dir/<name><extension>`.
///
/// The name must be a single plain component: no separators, no NUL, and
/// not `.` or `..`.
pub fn destination_path(
    target_dir: &Path,
    name: &str,
    extension: &str,
) -> Result<PathBuf, PathError> {
    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(is_separator)
        || name.contains('\0')
    {
        return Err(PathError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(target_dir.join(destination_file_name(name, extension)))
}
