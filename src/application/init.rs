//! Initialize tracker use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Service for creating a new tracker directory
pub struct InitService;

impl InitService {
    /// Initialize a new tracker at the specified path
    pub fn execute(path: &Path, page_size: usize) -> Result<Config> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let config = Config::new(page_size);
        config.validate()?;

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;
        repo.save_config(&config)?;

        info!(
            "event=tracker_init module=init status=ok root={} page_size={}",
            path.display(),
            page_size
        );
        Ok(config)
    }
}
