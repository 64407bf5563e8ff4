use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::orchestrator::{RunSettings, DEFAULT_WORKERS};
use crate::render::{CommandRenderer, DEFAULT_ARGS, DEFAULT_PROGRAM};

pub const DEFAULT_KEYS_DIR: &str = "chord_links";
pub const DEFAULT_OUTPUT_DIR: &str = "Chords PDF";

/// External render tool (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Program to run; looked up on PATH.
    pub program: String,
    /// Arguments placed before the link and destination path.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Global configuration loaded from `~/.config/chordpdf/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordPdfConfig {
    /// Directory of `<Key>.json` chord lists (relative paths resolve against the working dir).
    pub keys_dir: PathBuf,
    /// Root directory for rendered PDFs.
    pub output_dir: PathBuf,
    /// Concurrent renders per key signature.
    pub workers: usize,
    /// Optional render tool override; if missing, `wkhtmltopdf --quiet` is used.
    #[serde(default)]
    pub renderer: Option<RendererConfig>,
}

impl Default for ChordPdfConfig {
    fn default() -> Self {
        Self {
            keys_dir: PathBuf::from(DEFAULT_KEYS_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            workers: DEFAULT_WORKERS,
            renderer: None,
        }
    }
}

impl ChordPdfConfig {
    /// Orchestrator settings; `workers` is clamped to at least 1.
    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            keys_dir: self.keys_dir.clone(),
            output_root: self.output_dir.clone(),
            workers: self.workers.max(1),
        }
    }

    pub fn renderer(&self) -> CommandRenderer {
        let rc = self.renderer.clone().unwrap_or_default();
        CommandRenderer::new(rc.program, rc.args)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("chordpdf")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ChordPdfConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ChordPdfConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ChordPdfConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
