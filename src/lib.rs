// src/lib.rs

pub mod cli;
pub mod errors;
pub mod logging;
pub mod project;
pub mod resolve;
pub mod run;

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::errors::{HookrunError, Result};
use crate::project::{CONFIG_FILE_NAME, find_project_root, load_from_path};
use crate::run::{Invocation, TerminalSink};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - project-root discovery (walk up for `.pre-commit-config.yaml`)
/// - config loading (hook ids)
/// - executable resolution
/// - process execution + sink lifecycle
///
/// Returns the exit code the host process should report. Each failure step
/// maps to its own `HookrunError` variant so the user always sees which
/// step failed, never a generic catch-all.
pub async fn run_cli(args: CliArgs) -> Result<i32> {
    let file = match args.file {
        Some(ref f) => Some(absolute(f)?),
        None => None,
    };

    let start = search_origin(&args, file.as_deref())?;
    let root = find_project_root(&start).ok_or(HookrunError::ProjectRootNotFound { start })?;
    info!(root = ?root, "using project root");

    let config = load_from_path(root.join(CONFIG_FILE_NAME))?;
    let hook_ids = config.hook_ids();
    debug!(count = hook_ids.len(), "hooks configured");

    if args.list {
        for id in &hook_ids {
            println!("{id}");
        }
        return Ok(0);
    }

    // clap enforces FILE unless --list was given.
    let file = file.ok_or_else(|| anyhow!("a FILE argument is required unless --list is given"))?;

    if let Some(ref hook) = args.hook {
        if !hook_ids.iter().any(|id| id == hook) {
            return Err(HookrunError::UnknownHook { id: hook.clone() });
        }
    }

    let executable = resolve::resolve(&root)?
        .ok_or_else(|| HookrunError::ExecutableNotFound { root: root.clone() })?;

    let invocation = Invocation::pre_commit_run(executable, root, args.hook.as_deref(), &file);
    debug!(?invocation, "constructed invocation");

    let mut sink = TerminalSink::new();
    let report = run::run(invocation, &mut sink).await?;

    if report.failed() {
        Ok(match report.exit {
            run::ExitKind::Code(code) if code != 0 => code,
            _ => 1,
        })
    } else {
        Ok(0)
    }
}

/// Where the project-root search starts: `--root` beats the file's own
/// directory, which beats the current working directory (`--list` without a
/// file).
fn search_origin(args: &CliArgs, file: Option<&Path>) -> Result<PathBuf> {
    if let Some(ref root) = args.root {
        return absolute(root);
    }
    if let Some(file) = file {
        return Ok(file.to_path_buf());
    }
    Ok(std::env::current_dir()?)
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
