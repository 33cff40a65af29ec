// src/project/mod.rs

//! Project discovery and marker-config parsing.
//!
//! Responsibilities:
//! - Locate the project root by walking parent directories for the marker
//!   file (`locate.rs`).
//! - Deserialize `.pre-commit-config.yaml` far enough to enumerate hook ids
//!   (`config.rs`).
//!
//! The config file belongs to pre-commit, not to us; we read it, never
//! write it, and ignore every field we don't need.

pub mod config;
pub mod locate;

pub use config::{Config, Hook, Repo, load_from_path};
pub use locate::{CONFIG_FILE_NAME, find_project_root};
