// src/run/invocation.rs

use std::path::{Path, PathBuf};

/// Immutable description of one process run.
///
/// Arguments are passed to the OS as a literal vector, never interpolated
/// into a shell string. An `Invocation` is consumed by `run`; re-running
/// means constructing a new one.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Invocation {
    pub fn new(program: PathBuf, args: Vec<String>, working_dir: PathBuf) -> Self {
        Self {
            program,
            args,
            working_dir,
        }
    }

    /// Argv for `pre-commit run [<hook>] --files <file>`, run from the
    /// project root. No hook id means "run all configured hooks".
    pub fn pre_commit_run(
        executable: PathBuf,
        project_root: PathBuf,
        hook: Option<&str>,
        file: &Path,
    ) -> Self {
        let mut args = vec!["run".to_string()];
        if let Some(hook) = hook {
            args.push(hook.to_string());
        }
        args.push("--files".to_string());
        args.push(file.display().to_string());

        Self::new(executable, args, project_root)
    }

    /// Header text identifying this invocation in the sink.
    pub fn title(&self) -> String {
        format!("{} {}", self.program.display(), self.args.join(" "))
    }
}
