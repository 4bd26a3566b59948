//! Error types for moodlog

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog
#[derive(Debug, Error)]
pub enum MoodError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Please select a mood first!")]
    NoMoodSelected,

    #[error("You already have an entry for {0}")]
    AlreadyRecorded(NaiveDate),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodError::NotMoodlogDirectory(_) => 2,
            MoodError::NoMoodSelected | MoodError::InvalidMood(_) => 3,
            MoodError::AlreadyRecorded(_) => 0,
            _ => 1,
        }
    }

    /// Informational errors are reported as notices rather than failures
    pub fn is_informational(&self) -> bool {
        matches!(self, MoodError::AlreadyRecorded(_))
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to start tracking\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your tracker path",
                    path.display()
                )
            }
            MoodError::InvalidMood(input) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods:\n\
                    • great, good, okay, down, struggling\n\
                    • Ratings 1 (struggling) to 5 (great)\n\n\
                    Examples:\n\
                    moodlog log good\n\
                    moodlog log 4 --activity exercise",
                    input
                )
            }
            MoodError::InvalidWindow(input) => {
                format!(
                    "Invalid window: '{}'\n\n\
                    Valid windows: all, 7d, 30d, 90d\n\
                    Example: moodlog list --window 30d",
                    input
                )
            }
            MoodError::StorageUnavailable(msg) => {
                format!(
                    "Storage unavailable: {}\n\n\
                    Suggestions:\n\
                    • Check free disk space and permissions on .moodlog/\n\
                    • Changes made in this session were kept in memory only",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodError
pub type Result<T> = std::result::Result<T, MoodError>;
