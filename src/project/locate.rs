// src/project/locate.rs

use std::path::{Path, PathBuf};

use tracing::debug;

/// Marker file whose directory defines the project root.
pub const CONFIG_FILE_NAME: &str = ".pre-commit-config.yaml";

/// Find the nearest ancestor of `start` that contains the marker config.
///
/// `start` may be a file (the search begins at its parent) or a directory
/// (included in the search itself). Returns `None` when no ancestor carries
/// a `.pre-commit-config.yaml`; the caller decides how to surface that.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let origin = if start.is_dir() { start } else { start.parent()? };

    for dir in origin.ancestors() {
        if dir.join(CONFIG_FILE_NAME).is_file() {
            debug!(root = ?dir, "project root located");
            return Some(dir.to_path_buf());
        }
    }

    debug!(start = ?start, "no project root found in any ancestor");
    None
}
