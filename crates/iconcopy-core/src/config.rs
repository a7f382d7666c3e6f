use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest location used when nothing else is configured.
pub const DEFAULT_MANIFEST: &str = "icons/pack.json";
/// Directory holding the pack's SVG files.
pub const DEFAULT_SOURCE_DIR: &str = "icons/SVG";
/// Directory receiving `<name>.svg` copies.
pub const DEFAULT_TARGET_DIR: &str = "../../public/providers/SVG";
pub const DEFAULT_EXTENSION: &str = ".svg";

/// Paths for a copy run, optionally loaded from `~/.config/iconcopy/config.toml`.
///
/// Relative paths are resolved against the current working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconCopyConfig {
    /// JSON manifest listing the icons.
    pub manifest: PathBuf,
    /// Directory the manifest filenames are looked up in (by basename).
    pub source_dir: PathBuf,
    /// Directory the renamed copies are written to; created if missing.
    pub target_dir: PathBuf,
    /// Extension appended to each entry's name, including the leading dot.
    pub extension: String,
}

impl Default for IconCopyConfig {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Values from flags or environment that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub manifest: Option<PathBuf>,
    pub source_dir: Option<PathBuf>,
    pub target_dir: Option<PathBuf>,
    pub extension: Option<String>,
}

impl IconCopyConfig {
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(p) = &overrides.manifest {
            self.manifest = p.clone();
        }
        if let Some(p) = &overrides.source_dir {
            self.source_dir = p.clone();
        }
        if let Some(p) = &overrides.target_dir {
            self.target_dir = p.clone();
        }
        if let Some(ext) = &overrides.extension {
            self.extension = ext.clone();
        }
        self.extension = normalize_extension(&self.extension);
        self
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Ensure a non-empty extension starts with a dot (`svg` -> `.svg`).
pub fn normalize_extension(ext: &str) -> String {
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// `~/.config/iconcopy/config.toml` if it exists.
pub fn default_config_file() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("iconcopy")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from an explicit file, or from the default location.
///
/// An explicit path must exist; a missing default file means built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<IconCopyConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_file()? {
            Some(p) => p,
            None => {
                tracing::debug!("no config file found, using defaults");
                return Ok(IconCopyConfig::default());
            }
        },
    };
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<IconCopyConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let mut cfg: IconCopyConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    cfg.extension = normalize_extension(&cfg.extension);
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
