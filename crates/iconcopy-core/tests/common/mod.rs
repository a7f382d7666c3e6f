//! Throwaway icon pack on disk for integration tests.
//!
//! Mirrors the usual layout: `icons/pack.json`, `icons/SVG/*.svg`, and a
//! target under `public/providers/SVG`.

#![allow(dead_code)]

use iconcopy_core::config::IconCopyConfig;
use iconcopy_core::CopyOptions;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct IconPack {
    pub root: TempDir,
}

impl IconPack {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("icons/SVG")).unwrap();
        IconPack { root }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.path().join("icons/pack.json")
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root.path().join("icons/SVG")
    }

    pub fn target_dir(&self) -> PathBuf {
        self.root.path().join("public/providers/SVG")
    }

    pub fn add_svg(&self, file: &str, contents: &[u8]) {
        fs::write(self.source_dir().join(file), contents).unwrap();
    }

    /// Write a manifest from `(filename, name)` pairs.
    pub fn write_manifest(&self, entries: &[(&str, &str)]) {
        let icons: Vec<_> = entries
            .iter()
            .map(|(filename, name)| serde_json::json!({ "filename": filename, "name": name }))
            .collect();
        let doc = serde_json::json!({ "name": "test pack", "icons": icons });
        fs::write(self.manifest_path(), serde_json::to_vec_pretty(&doc).unwrap()).unwrap();
    }

    pub fn write_raw_manifest(&self, json: &str) {
        fs::write(self.manifest_path(), json).unwrap();
    }

    pub fn config(&self) -> IconCopyConfig {
        IconCopyConfig {
            manifest: self.manifest_path(),
            source_dir: self.source_dir(),
            target_dir: self.target_dir(),
            ..IconCopyConfig::default()
        }
    }

    pub fn options(&self) -> CopyOptions {
        CopyOptions::from_config(&self.config())
    }

    /// Sorted file names currently in the target directory.
    pub fn target_files(&self) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(self.target_dir()) {
            Ok(rd) => rd
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}
