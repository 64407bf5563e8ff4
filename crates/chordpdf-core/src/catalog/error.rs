//! Catalog error type.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while scanning the keys directory or loading a key signature file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Keys directory missing, not a directory, or unreadable.
    #[error("read keys directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Key signature file could not be read.
    #[error("read key signature file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a JSON array of `{link, name}` objects.
    #[error("parse key signature file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
