// src/beads/loader.rs

use std::fs;
use std::path::Path;

use crate::beads::model::Bead;
use crate::errors::{Result, TrackdagError};

/// Load a beads list from a JSON file.
///
/// This only performs deserialization; there is **no** semantic validation
/// pass afterwards. The assignment tolerates dangling `blocked_by`
/// references and dependency cycles, so nothing about the graph itself can
/// make a file invalid. Shape problems (not a JSON array, a bead without an
/// `id`) are rejected here by serde.
///
/// Errors:
/// - [`TrackdagError::BeadsFileNotFound`] when `path` does not exist,
/// - [`TrackdagError::Io`] when the file cannot be read,
/// - [`TrackdagError::Json`] when the contents are not a valid bead list.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<Bead>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TrackdagError::BeadsFileNotFound(
            path.display().to_string(),
        ));
    }

    let contents = fs::read_to_string(path)?;
    let beads: Vec<Bead> = serde_json::from_str(&contents)?;

    Ok(beads)
}
