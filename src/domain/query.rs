//! Time-window filtering and pagination of entries

use crate::domain::entry::{EntryMap, MoodEntry};
use crate::error::{MoodError, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative time filter applied to entry timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Window {
    #[default]
    All,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "90d")]
    Last90Days,
}

impl Window {
    /// Length of the window, `None` for all-time
    pub fn days(self) -> Option<i64> {
        match self {
            Window::All => None,
            Window::Last7Days => Some(7),
            Window::Last30Days => Some(30),
            Window::Last90Days => Some(90),
        }
    }

    /// Whether an entry captured at `timestamp` falls inside the window ending at `now`
    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.days() {
            None => true,
            Some(days) => timestamp >= now - Duration::days(days),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Window::All => "all",
            Window::Last7Days => "7d",
            Window::Last30Days => "30d",
            Window::Last90Days => "90d",
        };
        f.write_str(name)
    }
}

impl FromStr for Window {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Window::All),
            "7d" | "week" | "last7days" => Ok(Window::Last7Days),
            "30d" | "month" | "last30days" => Ok(Window::Last30Days),
            "90d" | "3months" | "last90days" => Ok(Window::Last90Days),
            _ => Err(MoodError::InvalidWindow(s.to_string())),
        }
    }
}

/// Entries captured within `window`, most recent date first
pub fn filter(
    entries: &EntryMap,
    window: Window,
    now: DateTime<Utc>,
) -> Vec<(NaiveDate, MoodEntry)> {
    // BTreeMap iterates oldest first; reversing gives date descending
    entries
        .iter()
        .rev()
        .filter(|(_, entry)| window.contains(entry.timestamp, now))
        .map(|(date, entry)| (*date, entry.clone()))
        .collect()
}

/// The `page_index`-th slice of `page_size` items; empty past the end
pub fn paginate<T>(items: &[T], page_size: usize, page_index: usize) -> &[T] {
    if page_size == 0 {
        return &[];
    }
    let start = page_index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// One page of the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub entries: Vec<(NaiveDate, MoodEntry)>,
    pub page_index: usize,
    pub total: usize,
    /// Whether a later non-empty page exists
    pub has_more: bool,
}

impl Page {
    /// Filter, sort and slice in one pass
    pub fn load(
        entries: &EntryMap,
        window: Window,
        now: DateTime<Utc>,
        page_size: usize,
        page_index: usize,
    ) -> Self {
        let filtered = filter(entries, window, now);
        let slice = paginate(&filtered, page_size, page_index);
        let end = page_index.saturating_mul(page_size).saturating_add(slice.len());
        Page {
            has_more: !slice.is_empty() && end < filtered.len(),
            entries: slice.to_vec(),
            page_index,
            total: filtered.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
