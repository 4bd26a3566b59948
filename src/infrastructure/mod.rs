//! Infrastructure layer - External I/O and persistence

pub mod chart;
pub mod config;
pub mod repository;
pub mod store;

pub use chart::{ChartRenderer, TextChart};
pub use config::Config;
pub use repository::{FileSystemRepository, TrackerRepository};
pub use store::{EntryStore, JsonFileStore, MemoryStore};
