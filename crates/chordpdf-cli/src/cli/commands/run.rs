//! `chordpdf run` – render every pending key signature.

use anyhow::Result;
use chordpdf_core::config::ChordPdfConfig;
use chordpdf_core::orchestrator::Orchestrator;
use std::sync::Arc;

use super::Overrides;

pub async fn run_download(cfg: &ChordPdfConfig, overrides: Overrides) -> Result<()> {
    let settings = overrides.run_settings(cfg);
    let renderer = overrides.renderer(cfg);
    tracing::info!(
        keys_dir = %settings.keys_dir.display(),
        output_root = %settings.output_root.display(),
        workers = settings.workers,
        renderer = renderer.program(),
        "starting run"
    );

    let orchestrator = Orchestrator::new(settings, Arc::new(renderer));
    let summary = orchestrator.run().await?;

    if summary.keys.is_empty() {
        println!("No key signature files found.");
        return Ok(());
    }

    println!(
        "{} key(s) downloaded ({} chord(s)), {} skipped.",
        summary.downloaded_keys(),
        summary.dispatched_chords(),
        summary.skipped_keys()
    );
    if summary.failed_renders() > 0 {
        tracing::warn!("{} render(s) failed; see log for details", summary.failed_renders());
    }
    tracing::info!("run completed {} key(s)", summary.keys.len());
    Ok(())
}
