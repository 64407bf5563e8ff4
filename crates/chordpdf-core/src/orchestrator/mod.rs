//! Download orchestrator.
//!
//! Walks the key signatures one at a time. A key whose output directory
//! already exists is skipped without reading its file; otherwise the directory
//! is created and the key's chords are rendered through a bounded pool that is
//! fully drained before the next key starts.

mod pool;
mod summary;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::{self, KeySignature};
use crate::render::Renderer;

pub use pool::{chord_destination, download_chords, download_one};
pub use summary::{KeyOutcome, PoolReport, RunSummary};

/// Default number of concurrent renders per key signature.
pub const DEFAULT_WORKERS: usize = 7;

/// Paths and pool size for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Directory holding one `<Key>.json` per key signature.
    pub keys_dir: PathBuf,
    /// Root under which `<Key>/<Chord>.pdf` files are written.
    pub output_root: PathBuf,
    /// Maximum renders in flight for a single key.
    pub workers: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            keys_dir: PathBuf::from(crate::config::DEFAULT_KEYS_DIR),
            output_root: PathBuf::from(crate::config::DEFAULT_OUTPUT_DIR),
            workers: DEFAULT_WORKERS,
        }
    }
}

pub struct Orchestrator {
    settings: RunSettings,
    renderer: Arc<dyn Renderer>,
}

impl Orchestrator {
    pub fn new(settings: RunSettings, renderer: Arc<dyn Renderer>) -> Self {
        Self { settings, renderer }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Processes every key signature in `keys_dir`, strictly sequentially.
    ///
    /// Filesystem and parse errors abort the whole run; keys handled before the
    /// failure keep their output. Render failures do not abort.
    pub async fn run(&self) -> Result<RunSummary> {
        let keys =
            catalog::list_key_signatures(&self.settings.keys_dir, &self.settings.output_root)?;
        tracing::info!(
            keys = keys.len(),
            keys_dir = %self.settings.keys_dir.display(),
            "found key signatures"
        );

        let mut summary = RunSummary::default();
        for key in &keys {
            let outcome = self.process_key(key).await?;
            summary.keys.push((key.name().to_string(), outcome));
        }
        Ok(summary)
    }

    /// Handles a single key signature: skip if its output directory exists,
    /// otherwise create it and render every chord.
    pub async fn process_key(&self, key: &KeySignature) -> Result<KeyOutcome> {
        let output_dir = key.output_dir();
        if output_dir.is_dir() {
            println!(
                "The directory \"{}\" already exists. Skipping download.",
                output_dir.display()
            );
            tracing::info!(key = key.name(), dir = %output_dir.display(), "output exists, skipping");
            return Ok(KeyOutcome::Skipped);
        }

        fs::create_dir_all(output_dir)
            .with_context(|| format!("create output directory {}", output_dir.display()))?;
        println!(
            "Beginning download for \"{}\" chords in \"{}\"",
            key.name(),
            output_dir.display()
        );

        let chords = key.chords()?;
        tracing::info!(key = key.name(), chords = chords.len(), "beginning download");

        let report = download_chords(
            Arc::clone(&self.renderer),
            chords,
            output_dir,
            self.settings.workers,
        )
        .await?;
        if report.failed > 0 {
            tracing::warn!(
                key = key.name(),
                failed = report.failed,
                dispatched = report.dispatched,
                "some renders failed"
            );
        }

        Ok(KeyOutcome::Downloaded {
            chords: report.dispatched,
            failed: report.failed,
        })
    }
}
