// src/resolve/mod.rs

//! Executable resolution.
//!
//! Finds the project-local `pre-commit` binary by trying a fixed, ordered
//! list of independent strategies and taking the first validated hit:
//!
//! - [`git_hooks`]: read the interpreter path recorded in the installed
//!   `.git/hooks/pre-commit` script and derive its sibling executable. This
//!   reflects the exact environment pre-commit was installed into, so it is
//!   tried first.
//! - [`venv`]: probe conventional virtualenv locations under the project
//!   root.
//!
//! Strategy results are never merged; `$PATH` is never searched. "Nothing
//! found" is a normal `Ok(None)` outcome, not an error. Only unexpected
//! filesystem faults (e.g. permission denied on an existing hook file)
//! propagate as errors.

pub mod git_hooks;
pub mod venv;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::Result;

/// Binary name of the tool we resolve.
pub const TOOL_NAME: &str = "pre-commit";

/// One independent, fallible way of locating the executable.
///
/// Side-effect-free apart from filesystem reads. `Ok(None)` means "this
/// strategy has nothing", and control falls through to the next one.
pub type Strategy = fn(&Path) -> Result<Option<PathBuf>>;

/// Strategies in priority order. The order is part of the contract.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("git-hooks", git_hooks::from_git_hooks),
    ("venv", venv::from_venv),
];

/// Resolve the best available path to the project-local executable.
///
/// The returned path existed at resolution time; there is no guarantee it
/// is still runnable when the caller spawns it, which is why spawn failures
/// have their own error path.
pub fn resolve(project_root: &Path) -> Result<Option<PathBuf>> {
    for (name, strategy) in STRATEGIES {
        if let Some(path) = strategy(project_root)? {
            debug!(strategy = name, path = ?path, "resolved executable");
            return Ok(Some(path));
        }
        debug!(strategy = name, "strategy yielded nothing, falling through");
    }

    Ok(None)
}
