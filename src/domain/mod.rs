//! Domain layer - Mood entries and the views derived from them

pub mod analytics;
pub mod entry;
pub mod mood;
pub mod query;

pub use analytics::{Distribution, WeekPoint, WeeklyAverage, WeeklySummary};
pub use entry::{EntryMap, MoodEntry};
pub use mood::{Activity, MoodLevel};
pub use query::{Page, Window};
