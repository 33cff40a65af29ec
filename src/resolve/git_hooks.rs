// src/resolve/git_hooks.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::Result;
use crate::resolve::TOOL_NAME;

// pre-commit stamps the interpreter it was installed with into the hook
// script it writes. Older installs used the quoted form.
static INSTALL_PYTHON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^INSTALL_PYTHON=(.+)$").unwrap());
static INSTALL_PYTHON_LEGACY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^INSTALL_PYTHON = '(.+?)'$").unwrap());

/// Derive the executable from the `INSTALL_PYTHON` marker in the installed
/// git hook script.
///
/// A missing hook file (fresh checkout, hooks not installed yet) and a hook
/// without a recognisable marker are both strategy failure, not faults.
pub fn from_git_hooks(project_root: &Path) -> Result<Option<PathBuf>> {
    let hook_path = project_root.join(".git").join("hooks").join(TOOL_NAME);

    let contents = match fs::read_to_string(&hook_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let Some(interpreter) = marker_interpreter(&contents) else {
        debug!(hook = ?hook_path, "hook script has no INSTALL_PYTHON marker");
        return Ok(None);
    };

    let Some(candidate) = sibling_executable(Path::new(interpreter)) else {
        debug!(interpreter, "marker interpreter is not a bin/python path");
        return Ok(None);
    };

    if candidate.is_file() {
        Ok(Some(candidate))
    } else {
        debug!(candidate = ?candidate, "derived sibling path does not exist");
        Ok(None)
    }
}

/// Extract the interpreter path from the marker line, accepting both the
/// modern `KEY=value` form and the legacy `KEY = 'value'` one.
fn marker_interpreter(contents: &str) -> Option<&str> {
    INSTALL_PYTHON
        .captures(contents)
        .or_else(|| INSTALL_PYTHON_LEGACY.captures(contents))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Rewrite a trailing `bin/python` into `bin/pre-commit`.
///
/// Interpreters that don't sit at `.../bin/python` (e.g. `python3`, or a
/// Windows layout) can't be rewritten; the strategy falls through instead
/// of guessing.
fn sibling_executable(interpreter: &Path) -> Option<PathBuf> {
    if interpreter.file_name()? != "python" {
        return None;
    }
    let bin = interpreter.parent()?;
    if bin.file_name()? != "bin" {
        return None;
    }
    Some(bin.join(TOOL_NAME))
}
