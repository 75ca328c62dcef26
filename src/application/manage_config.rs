//! Config management use case

use crate::error::{ReviewError, Result};
use crate::infrastructure::{Config, FileSystemRepository, ReviewRepository};
use tracing::info;

const VALID_KEYS: &str = "editor, window_days, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "window_days" => Ok(config.window_days.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ReviewError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "window_days" => {
                config.window_days = value
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|days| *days > 0)
                    .ok_or_else(|| {
                        ReviewError::Config(format!(
                            "window_days must be a positive whole number, got '{}'",
                            value
                        ))
                    })?;
            }
            "created" => {
                return Err(ReviewError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ReviewError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, window_days",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        info!(key, value, "updated config");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
