//! Command-line values that take precedence over config.toml.

use chordpdf_core::config::ChordPdfConfig;
use chordpdf_core::orchestrator::RunSettings;
use chordpdf_core::render::CommandRenderer;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct Overrides {
    pub keys_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub workers: Option<usize>,
    pub renderer: Option<String>,
}

impl Overrides {
    pub fn run_settings(&self, cfg: &ChordPdfConfig) -> RunSettings {
        let mut settings = cfg.run_settings();
        if let Some(dir) = &self.keys_dir {
            settings.keys_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            settings.output_root = dir.clone();
        }
        if let Some(n) = self.workers {
            settings.workers = n.max(1);
        }
        settings
    }

    /// Config renderer, with the program swapped if `--renderer` was given (args kept).
    pub fn renderer(&self, cfg: &ChordPdfConfig) -> CommandRenderer {
        let base = cfg.renderer();
        match &self.renderer {
            Some(program) => CommandRenderer::new(program.clone(), base.args().to_vec()),
            None => base,
        }
    }
}
