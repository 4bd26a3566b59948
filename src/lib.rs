//! moodlog - Terminal mood journal
//!
//! Tracks one mood entry per day with optional activity tags and a note,
//! persists them as JSON, and derives weekly charts, a mood distribution,
//! streaks and averages from the stored history.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::MoodError;
