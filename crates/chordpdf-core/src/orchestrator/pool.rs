//! Bounded render pool for the chords of one key signature.
//!
//! Keeps up to `workers` renders in flight; when one finishes, the next chord
//! is started until the list is exhausted. Returns only once every render has
//! completed.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::Chord;
use crate::render::{RenderError, Renderer};

use super::summary::PoolReport;

/// Destination of one chord's PDF: `<output_dir>/<chord name>.pdf`.
pub fn chord_destination(chord: &Chord, output_dir: &Path) -> PathBuf {
    output_dir.join(chord.pdf_file_name())
}

/// Renders one chord into `output_dir`. Blocks for the duration of the render.
pub fn download_one(
    renderer: &dyn Renderer,
    chord: &Chord,
    output_dir: &Path,
) -> Result<(), RenderError> {
    let destination = chord_destination(chord, output_dir);
    tracing::debug!(chord = chord.name(), dest = %destination.display(), "render start");
    renderer.render(chord.link(), &destination)
}

/// Dispatches every chord through `renderer` with at most `workers` renders
/// running at once. Render failures and panicked render tasks are logged and
/// counted, never propagated; every task finishes before this returns.
pub async fn download_chords(
    renderer: Arc<dyn Renderer>,
    chords: Vec<Chord>,
    output_dir: &Path,
    workers: usize,
) -> Result<PoolReport> {
    let workers = workers.max(1);
    let mut pending = chords.into_iter();
    let mut report = PoolReport::default();
    let mut join_set = tokio::task::JoinSet::new();

    loop {
        while join_set.len() < workers {
            let Some(chord) = pending.next() else {
                break;
            };
            let renderer = Arc::clone(&renderer);
            let output_dir = output_dir.to_path_buf();
            report.dispatched += 1;
            join_set.spawn_blocking(move || {
                let result = download_one(renderer.as_ref(), &chord, &output_dir);
                (chord, result)
            });
        }

        let Some(res) = join_set.join_next().await else {
            break;
        };
        // A panicked render counts as failed; the rest of the set still drains.
        match res {
            Ok((_, Ok(()))) => {}
            Ok((chord, Err(err))) => {
                report.failed += 1;
                tracing::warn!(chord = chord.name(), link = chord.link(), "render failed: {}", err);
            }
            Err(join_err) => {
                report.failed += 1;
                tracing::warn!(dir = %output_dir.display(), "render task aborted: {}", join_err);
            }
        }
    }

    Ok(report)
}
