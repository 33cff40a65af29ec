// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! Expected absences (no hook marker line, no conventional virtualenv path,
//! missing hook file) are modelled as `Option`/fall-through by the modules
//! that produce them and never show up here. Only genuinely unexpected
//! conditions, plus the terminal "nothing worked" outcomes the CLI has to
//! report, become `HookrunError` values.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookrunError {
    #[error("no .pre-commit-config.yaml found in {start:?} or any parent directory")]
    ProjectRootNotFound { start: PathBuf },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("unknown hook id '{id}' (use --list to see configured hooks)")]
    UnknownHook { id: String },

    #[error("could not find an installed pre-commit under {root:?}")]
    ExecutableNotFound { root: PathBuf },

    #[error("failed to spawn {program:?}: {source}")]
    SpawnFailed {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, HookrunError>;
