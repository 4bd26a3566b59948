//! Config management use case

use crate::domain::Window;
use crate::error::{MoodError, Result};
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};

/// Service for managing tracker configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "page_size" => Ok(config.page_size.to_string()),
            "default_window" => Ok(config.default_window.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: page_size, default_window, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "page_size" => {
                config.page_size = value.trim().parse().map_err(|_| {
                    MoodError::Config(format!(
                        "Invalid page_size: '{}'. Expected a positive integer",
                        value
                    ))
                })?;
            }
            "default_window" => {
                config.default_window = value.parse::<Window>()?;
            }
            "created" => {
                return Err(MoodError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: page_size, default_window",
                    key
                )));
            }
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
