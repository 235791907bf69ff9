//! # Configuration
//!
//! Roster configuration is managed by [`confique`], which layers environment variables,
//! TOML files and compiled defaults.
//!
//! ## Resolution Order
//!
//! Highest priority first:
//! 1. **Environment variables**: `ROSTER_DATA_FILE`, `ROSTER_TIMEOUT_MS`, `ROSTER_LOG_JSON`
//! 2. **Local config**: `roster.toml` in the working directory
//! 3. **User config**: `roster.toml` in the OS config directory (via `directories`)
//! 4. **Compiled defaults**
//!
//! Command-line flags override all of these; that happens in the CLI.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `data.json` | Path of the JSON collection file |
//! | `timeout_ms` | `5000` | Upper bound for each store operation |
//! | `log_json` | `false` | Emit logs as JSON lines |

use crate::error::{Result, RosterError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "roster.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Path of the JSON file holding the user collection.
    #[config(env = "ROSTER_DATA_FILE", default = "data.json")]
    pub data_file: PathBuf,

    /// Timeout for a single store operation, in milliseconds.
    #[config(env = "ROSTER_TIMEOUT_MS", default = 5000)]
    pub timeout_ms: u64,

    /// Emit logs as JSON lines instead of human-readable text.
    #[config(env = "ROSTER_LOG_JSON", default = false)]
    pub log_json: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.json"),
            timeout_ms: 5000,
            log_json: false,
        }
    }
}

impl RosterConfig {
    /// Loads configuration for a session started in `working_dir`.
    pub fn load(working_dir: &Path) -> Result<Self> {
        let mut builder = Self::builder()
            .env()
            .file(working_dir.join(CONFIG_FILE_NAME));
        if let Some(user_config) = user_config_path() {
            builder = builder.file(user_config);
        }
        let mut config = builder
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))?;

        if config.data_file.is_relative() {
            config.data_file = working_dir.join(&config.data_file);
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// `roster.toml` in the per-user config directory, if the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "roster", "roster")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
