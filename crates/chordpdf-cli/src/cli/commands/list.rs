//! `chordpdf list` – show key signatures and their download status.

use anyhow::Result;
use chordpdf_core::catalog;
use chordpdf_core::config::ChordPdfConfig;

use super::Overrides;

/// Prints one line per key: name, status, output directory.
/// Status comes from the output directory alone; chord files are not parsed.
pub fn run_list(cfg: &ChordPdfConfig, overrides: Overrides) -> Result<()> {
    let settings = overrides.run_settings(cfg);
    let keys = catalog::list_key_signatures(&settings.keys_dir, &settings.output_root)?;
    if keys.is_empty() {
        println!("No key signature files found.");
        return Ok(());
    }

    println!("{:<12} {:<11} {}", "KEY", "STATUS", "OUTPUT");
    for key in &keys {
        let status = if key.output_dir().is_dir() {
            "downloaded"
        } else {
            "pending"
        };
        println!(
            "{:<12} {:<11} {}",
            key.name(),
            status,
            key.output_dir().display()
        );
    }
    Ok(())
}
