// IconGen - platform/fs.rs
//
// Output directory handling.

use crate::util::error::IconGenError;
use std::path::Path;

/// Create `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), IconGenError> {
    std::fs::create_dir_all(dir).map_err(|e| IconGenError::Io {
        path: dir.to_path_buf(),
        operation: "create output directory",
        source: e,
    })?;
    tracing::debug!(dir = %dir.display(), "Output directory ready");
    Ok(())
}
