// src/project/config.rs

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{HookrunError, Result};

/// The slice of `.pre-commit-config.yaml` we care about.
///
/// pre-commit's config has many more fields (stages, language versions,
/// excludes, ...); everything beyond `repos[].hooks[].id` is ignored during
/// deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repos: Vec<Repo>,
}

/// One `repos:` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    /// Repository URL, or "local" / "meta". Only used for log messages.
    #[serde(default)]
    pub repo: Option<String>,

    #[serde(default)]
    pub hooks: Vec<Hook>,
}

/// One hook under a repo.
#[derive(Debug, Clone, Deserialize)]
pub struct Hook {
    pub id: String,
}

impl Config {
    /// All configured hook ids, flattened across repos in file order.
    pub fn hook_ids(&self) -> Vec<String> {
        self.repos
            .iter()
            .flat_map(|repo| repo.hooks.iter().map(|hook| hook.id.clone()))
            .collect()
    }
}

/// Load and deserialize a config file from a given path.
///
/// An unreadable or unparsable file is a `ConfigError` with a message naming
/// the path, so the user can tell this step apart from root discovery or
/// executable resolution failing.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| HookrunError::ConfigError(format!("reading {path:?}: {e}")))?;

    let config: Config = serde_yaml::from_str(&contents)
        .map_err(|e| HookrunError::ConfigError(format!("parsing YAML from {path:?}: {e}")))?;

    Ok(config)
}
