//! A single downloadable chord.

use serde::Deserialize;

use crate::sanitize::safe_component_name;

/// Chord entry exactly as it appears in a key signature file.
#[derive(Debug, Deserialize)]
struct RawChord {
    link: String,
    name: String,
}

/// One chord diagram: its source page and a path-safe display name.
///
/// The name is sanitized once on construction and never contains `/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawChord")]
pub struct Chord {
    link: String,
    name: String,
}

impl Chord {
    pub fn new(link: impl Into<String>, raw_name: &str) -> Self {
        Self {
            link: link.into(),
            name: safe_component_name(raw_name),
        }
    }

    /// URL of the page the renderer turns into a PDF.
    pub fn link(&self) -> &str {
        &self.link
    }

    /// Sanitized display name, usable as a file stem.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// File name of the rendered diagram: `<name>.pdf`.
    pub fn pdf_file_name(&self) -> String {
        format!("{}.pdf", self.name)
    }
}

impl From<RawChord> for Chord {
    fn from(raw: RawChord) -> Self {
        Chord::new(raw.link, &raw.name)
    }
}
