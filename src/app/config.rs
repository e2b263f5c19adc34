//! Shell configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_LOG_BUFFER_CAP: usize = 2000;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// The workspace root the tree materializes from. `None` when the host
    /// has no project/workspace context.
    pub workspace_root: Option<PathBuf>,
    /// How many recent log lines the Console panel keeps.
    pub log_buffer_cap: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            workspace_root: None,
            log_buffer_cap: DEFAULT_LOG_BUFFER_CAP,
        }
    }
}

impl ShellConfig {
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: Some(root.into()),
            ..Self::default()
        }
    }

    /// Load from a JSON file; a missing or unparsable file falls back to
    /// defaults (a broken config must not take the panel down).
    pub fn load(path: &Path) -> Self {
        let Ok(text) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
                Self::default()
            }
        }
    }
}
