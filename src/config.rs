//! Application configuration.
//!
//! Loaded from `$XDG_CONFIG_HOME/i3focus/config.json` when present.
//! Every field is optional — a minimal `{}` file is valid and all values
//! fall back to their compiled-in defaults.  Unknown keys are ignored so
//! the file can grow new sections without breaking older binaries.
//!
//! # Example
//!
//! ```json
//! {
//!   "history_file": "/run/user/1000/i3-last-workspace"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where to persist the last-departed-workspace id.
    ///
    /// Defaults to `.i3-last-workspace` in the platform temp directory.
    #[serde(default)]
    pub history_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
