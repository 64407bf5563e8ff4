//! Chord catalog: key signature files and the chords they list.
//!
//! Each `<Key>.json` in the keys directory holds a JSON array of
//! `{"link": "<url>", "name": "<chord>"}` objects.

mod chord;
mod error;
mod key_signature;

use std::fs;
use std::path::Path;

pub use chord::Chord;
pub use error::CatalogError;
pub use key_signature::KeySignature;

/// Lists one [`KeySignature`] per `*.json` file directly inside `keys_dir`,
/// sorted by file name. Subdirectories and other extensions are ignored.
pub fn list_key_signatures(
    keys_dir: &Path,
    output_root: &Path,
) -> Result<Vec<KeySignature>, CatalogError> {
    let read_dir_err = |source| CatalogError::ReadDir {
        path: keys_dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(keys_dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        let is_json = path.extension().map_or(false, |ext| ext == "json");
        if is_json && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    Ok(paths
        .into_iter()
        .map(|path| KeySignature::new(path, output_root))
        .collect())
}
