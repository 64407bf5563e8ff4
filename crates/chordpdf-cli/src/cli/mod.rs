//! CLI for the chordpdf downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use chordpdf_core::config;
use std::path::PathBuf;

use commands::{run_completions, run_download, run_list, run_man, Overrides};

/// Top-level CLI for chordpdf.
#[derive(Debug, Parser)]
#[command(name = "chordpdf")]
#[command(about = "chordpdf: download piano chord diagrams as PDFs, one directory per key", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Render every chord of every key signature not yet downloaded.
    Run {
        /// Directory of `<Key>.json` chord lists (overrides config).
        #[arg(long, value_name = "DIR")]
        keys_dir: Option<PathBuf>,
        /// Root directory for rendered PDFs (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Concurrent renders per key signature (overrides config, default 7).
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
        /// Render tool program (overrides config, default wkhtmltopdf).
        #[arg(long, value_name = "PROGRAM")]
        renderer: Option<String>,
    },

    /// List key signatures and whether their output directory exists.
    List {
        /// Directory of `<Key>.json` chord lists (overrides config).
        #[arg(long, value_name = "DIR")]
        keys_dir: Option<PathBuf>,
        /// Root directory for rendered PDFs (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print a roff man page to stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run {
                keys_dir,
                output_dir,
                workers,
                renderer,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let overrides = Overrides {
                    keys_dir,
                    output_dir,
                    workers,
                    renderer,
                };
                run_download(&cfg, overrides).await?;
            }
            CliCommand::List {
                keys_dir,
                output_dir,
            } => {
                let cfg = config::load_or_init()?;
                let overrides = Overrides {
                    keys_dir,
                    output_dir,
                    ..Overrides::default()
                };
                run_list(&cfg, overrides)?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
