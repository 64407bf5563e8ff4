//! A key signature backed by one JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use super::chord::Chord;
use super::error::CatalogError;
use crate::sanitize::safe_component_name;

/// One `<Key>.json` file and the output directory its chords are rendered into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySignature {
    source_path: PathBuf,
    name: String,
    output_dir: PathBuf,
}

impl KeySignature {
    /// Derives the key name from the file stem (`/long/path/C#.json` → `C#`)
    /// and places its output under `output_root`.
    pub fn new(source_path: impl Into<PathBuf>, output_root: &Path) -> Self {
        let source_path = source_path.into();
        let stem = source_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = safe_component_name(&stem);
        let output_dir = output_root.join(&name);
        Self {
            source_path,
            name,
            output_dir,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Sanitized key name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<output_root>/<name>`.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Reads and parses the source file. Not cached: every call hits the disk.
    pub fn chords(&self) -> Result<Vec<Chord>, CatalogError> {
        let data = fs::read_to_string(&self.source_path).map_err(|source| CatalogError::Read {
            path: self.source_path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| CatalogError::Parse {
            path: self.source_path.clone(),
            source,
        })
    }
}
