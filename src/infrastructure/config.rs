//! Configuration management

use crate::domain::Window;
use crate::error::{MoodError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the tracker's metadata directory
pub const MOODLOG_DIR: &str = ".moodlog";

/// Entries shown per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub default_window: Window,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with the given page size
    pub fn new(page_size: usize) -> Self {
        Config {
            page_size,
            default_window: Window::All,
            created: Utc::now(),
        }
    }

    /// Reject values the rest of the tracker cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(MoodError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(MOODLOG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| MoodError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let moodlog_dir = path.join(MOODLOG_DIR);
        let config_path = moodlog_dir.join("config.toml");

        if !moodlog_dir.exists() {
            fs::create_dir(&moodlog_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config() {
        let config = Config::new(25);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.default_window, Window::All);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new(5);
        config.default_window = Window::Last30Days;

        config.save_to_dir(temp.path()).unwrap();

        assert!(temp.path().join(".moodlog").exists());
        assert!(temp.path().join(".moodlog/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_saved_format() {
        let temp = TempDir::new().unwrap();
        Config::new(10).save_to_dir(temp.path()).unwrap();
        let content = fs::read_to_string(temp.path().join(".moodlog/config.toml")).unwrap();
        assert!(content.contains("page_size = 10"));
        assert!(content.contains("default_window = \"all\""));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodlog")).unwrap();
        fs::write(
            temp.path().join(".moodlog/config.toml"),
            "created = \"2025-01-17T10:00:00Z\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(loaded.default_window, Window::All);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            MoodError::NotMoodlogDirectory(_) => {}
            other => panic!("Expected NotMoodlogDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let temp = TempDir::new().unwrap();
        let config = Config::new(0);
        assert!(matches!(config.validate(), Err(MoodError::Config(_))));
        assert!(config.save_to_dir(temp.path()).is_err());
    }
}
