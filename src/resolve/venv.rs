// src/resolve/venv.rs

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::resolve::TOOL_NAME;

/// Conventional virtualenv directory names, most common first.
///
/// The order encodes observed convention popularity, not alphabetical
/// order; do not sort.
const VENV_DIRS: &[&str] = &["venv", ".venv", "virtualenv_run", "virtualenv"];

/// Probe the conventional `<root>/<venv>/bin/pre-commit` locations and
/// return the first that exists.
pub fn from_venv(project_root: &Path) -> Result<Option<PathBuf>> {
    for dir in VENV_DIRS {
        let candidate = project_root.join(dir).join("bin").join(TOOL_NAME);
        if candidate.is_file() {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}
