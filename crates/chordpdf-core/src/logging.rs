//! Tracing setup. Runs append to `~/.local/state/chordpdf/chordpdf.log`;
//! `RUST_LOG` overrides the default filter.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Render-level detail from chordpdf itself, `info` from everything else.
pub const DEFAULT_FILTER: &str = "info,chordpdf=debug,chordpdf_core=debug";

const LOG_FILE_NAME: &str = "chordpdf.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Location of the run log, creating the state directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("chordpdf")?;
    xdg_dirs
        .place_state_file(LOG_FILE_NAME)
        .context("create chordpdf state directory")
}

/// Installs the global subscriber writing to [`log_file_path`] and returns that path.
/// On error nothing is installed, so the caller may fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("chordpdf logging initialized at {}", path.display());
    Ok(path)
}

/// Installs a stderr-only subscriber.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
