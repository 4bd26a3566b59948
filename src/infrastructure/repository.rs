//! Tracker directory discovery and layout

use crate::error::{MoodError, Result};
use crate::infrastructure::config::MOODLOG_DIR;
use crate::infrastructure::store::JsonFileStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// File holding the serialized entry map
pub const ENTRIES_FILE: &str = "entries.json";

/// Abstract repository for tracker metadata
pub trait TrackerRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TrackerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover tracker root by walking up from current directory
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover tracker root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MoodError::NotMoodlogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(MOODLOG_DIR).is_dir()
    }

    /// Path of the JSON entry file
    pub fn entries_path(&self) -> PathBuf {
        self.root.join(MOODLOG_DIR).join(ENTRIES_FILE)
    }

    /// Entry store backed by this repository's entry file
    pub fn entry_store(&self) -> JsonFileStore {
        JsonFileStore::new(self.entries_path())
    }
}

impl TrackerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(MOODLOG_DIR);

        if moodlog_dir.exists() {
            return Err(MoodError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        Ok(())
    }
}
