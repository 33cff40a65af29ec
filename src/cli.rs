// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `hookrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hookrun",
    version,
    about = "Run the project-local pre-commit install against a file.",
    long_about = None
)]
pub struct CliArgs {
    /// File to run hooks against.
    ///
    /// The project root is located by walking this file's parent
    /// directories for a `.pre-commit-config.yaml`.
    #[arg(value_name = "FILE", required_unless_present = "list")]
    pub file: Option<PathBuf>,

    /// Run only this hook id instead of all configured hooks.
    #[arg(long, value_name = "ID")]
    pub hook: Option<String>,

    /// List the hook ids configured for the project, then exit.
    #[arg(long)]
    pub list: bool,

    /// Start the project-root search here instead of at FILE's directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `HOOKRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
