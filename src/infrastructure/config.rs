//! Configuration management

use crate::error::{ReviewError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Directory under the journal root holding lifereview metadata
pub const META_DIR: &str = ".lifereview";
const CONFIG_FILE: &str = "config.toml";

fn default_window_days() -> u32 {
    7
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    pub created: DateTime<Utc>,
    /// Days of daily reviews averaged by `scores` when no range is given
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            created: Utc::now(),
            window_days: default_window_days(),
        }
    }

    /// Load config from .lifereview/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReviewError::NotReviewDirectory(path.to_path_buf())
            } else {
                ReviewError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| ReviewError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .lifereview/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(meta_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Editor command; EDITOR and VISUAL take precedence over the config
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Number of days in the default aggregation window (at least 1)
    pub fn window_days(&self) -> u32 {
        self.window_days.max(1)
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
