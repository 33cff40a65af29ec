#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Minimal valid `.pre-commit-config.yaml` used when a test doesn't care
/// about the config contents.
pub const DEFAULT_CONFIG: &str = "\
repos:
  - repo: https://github.com/psf/black
    hooks:
      - id: black
";

/// Builder for on-disk project fixtures rooted in a tempdir.
///
/// Lays out the marker config, installed git hook scripts, and fake
/// virtualenv executables that the resolver strategies probe for.
pub struct ProjectBuilder {
    dir: TempDir,
}

impl ProjectBuilder {
    /// A fresh project containing only `.pre-commit-config.yaml`.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("creating tempdir");
        let builder = Self { dir };
        builder.write(".pre-commit-config.yaml", DEFAULT_CONFIG);
        builder
    }

    /// A bare directory with no marker config at all.
    pub fn bare() -> Self {
        let dir = TempDir::new().expect("creating tempdir");
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Replace the marker config with custom YAML.
    pub fn with_config(self, yaml: &str) -> Self {
        self.write(".pre-commit-config.yaml", yaml);
        self
    }

    /// Install a `.git/hooks/pre-commit` script carrying the modern
    /// `INSTALL_PYTHON=<path>` marker, pointing at `interpreter_rel` inside
    /// the project.
    pub fn with_hook_marker(self, interpreter_rel: &str) -> Self {
        let interpreter = self.path(interpreter_rel);
        self.write(
            ".git/hooks/pre-commit",
            &format!(
                "#!/usr/bin/env bash\nINSTALL_PYTHON={}\nexec \"$INSTALL_PYTHON\" -m pre_commit \"$@\"\n",
                interpreter.display()
            ),
        );
        self
    }

    /// Install a hook script carrying the legacy `INSTALL_PYTHON = '<path>'`
    /// marker form.
    pub fn with_legacy_hook_marker(self, interpreter_rel: &str) -> Self {
        let interpreter = self.path(interpreter_rel);
        self.write(
            ".git/hooks/pre-commit",
            &format!(
                "#!/usr/bin/env bash\nINSTALL_PYTHON = '{}'\n",
                interpreter.display()
            ),
        );
        self
    }

    /// Install a hook script with arbitrary contents.
    pub fn with_hook_script(self, contents: &str) -> Self {
        self.write(".git/hooks/pre-commit", contents);
        self
    }

    /// Create an empty file at `rel`, standing in for an executable.
    pub fn with_file(self, rel: &str) -> Self {
        self.write(rel, "");
        self
    }

    /// Create `<venv_dir>/bin/pre-commit` under the project root.
    pub fn with_venv_executable(self, venv_dir: &str) -> Self {
        self.with_file(&format!("{venv_dir}/bin/pre-commit"))
    }

    /// Absolute path of `rel` inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    fn write(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("creating fixture dirs");
        }
        fs::write(&path, contents).expect("writing fixture file");
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}
