//! External HTML-to-PDF render tool.
//!
//! The tool is a black box: it is invoked as `program <args...> <link> <destination>`
//! and is expected to write a PDF at `destination`.

use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Default render tool and its flags.
pub const DEFAULT_PROGRAM: &str = "wkhtmltopdf";
pub const DEFAULT_ARGS: &[&str] = &["--quiet"];

/// Failure of a single render invocation.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The program could not be started (not installed, not executable, ...).
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The program ran but exited unsuccessfully. `code` is `None` when killed by a signal.
    #[error("render exited with {}: {stderr}", exit_label(.code))]
    Exit { code: Option<i32>, stderr: String },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "signal".to_string(),
    }
}

/// Renders one page to a PDF file. Called concurrently from the worker pool.
pub trait Renderer: Send + Sync {
    fn render(&self, link: &str, destination: &Path) -> Result<(), RenderError>;
}

/// Renderer that shells out to an external command (blocking).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRenderer {
    program: String,
    args: Vec<String>,
}

impl CommandRenderer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for CommandRenderer {
    fn default() -> Self {
        Self::new(
            DEFAULT_PROGRAM,
            DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
        )
    }
}

impl Renderer for CommandRenderer {
    fn render(&self, link: &str, destination: &Path) -> Result<(), RenderError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(link)
            .arg(destination)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RenderError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RenderError::Exit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiet_wkhtmltopdf() {
        let r = CommandRenderer::default();
        assert_eq!(r.program(), "wkhtmltopdf");
        assert_eq!(r.args(), ["--quiet".to_string()]);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let r = CommandRenderer::new("chordpdf-no-such-render-tool", vec![]);
        let err = r
            .render("http://x", Path::new("/tmp/never.pdf"))
            .unwrap_err();
        assert!(matches!(err, RenderError::Spawn { .. }), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn passes_args_link_and_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("C.pdf");
        // sh -c '<script>' $0 $1 $2 $3: $1 = --quiet, $2 = link, $3 = destination.
        let r = CommandRenderer::new(
            "sh",
            vec![
                "-c".to_string(),
                r#"[ "$1" = --quiet ] && printf '%s' "$2" > "$3""#.to_string(),
                "render".to_string(),
                "--quiet".to_string(),
            ],
        );
        r.render("http://example.com/c", &dest).unwrap();
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), "http://example.com/c");
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_exit_error() {
        let r = CommandRenderer::new(
            "sh",
            vec!["-c".to_string(), "echo boom >&2; exit 3".to_string()],
        );
        match r.render("http://x", Path::new("/tmp/never.pdf")) {
            Err(RenderError::Exit { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("expected Exit error, got {:?}", other),
        }
    }
}
