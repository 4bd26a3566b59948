//! Mood entry record and its persisted shape

use crate::domain::mood::MoodLevel;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date key format used both on disk and in exports
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub const SKIPPED_MOOD: &str = "⏭️";
pub const SKIPPED_LABEL: &str = "Skipped";
pub const SKIPPED_NOTE: &str = "Day skipped";

/// All entries, keyed by calendar date (oldest first)
pub type EntryMap = BTreeMap<NaiveDate, MoodEntry>;

/// One calendar day's mood record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,
    pub value: Option<u8>,
    pub label: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(with = "timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skipped: bool,
}

impl MoodEntry {
    /// Create a rated entry; the note is trimmed and the timestamp truncated to milliseconds
    pub fn rated(
        level: MoodLevel,
        note: &str,
        activities: Vec<String>,
        captured: DateTime<Utc>,
    ) -> Self {
        MoodEntry {
            mood: level.emoji().to_string(),
            value: Some(level.value()),
            label: level.label().to_string(),
            note: note.trim().to_string(),
            activities,
            timestamp: truncate_to_millis(captured),
            skipped: false,
        }
    }

    /// Create the sentinel entry for a skipped day
    pub fn skipped(captured: DateTime<Utc>) -> Self {
        MoodEntry {
            mood: SKIPPED_MOOD.to_string(),
            value: None,
            label: SKIPPED_LABEL.to_string(),
            note: SKIPPED_NOTE.to_string(),
            activities: Vec::new(),
            timestamp: truncate_to_millis(captured),
            skipped: true,
        }
    }

    /// The rating, if this entry has a valid one
    ///
    /// Skipped entries and values outside 1..=5 yield `None`.
    pub fn level(&self) -> Option<MoodLevel> {
        if self.skipped {
            return None;
        }
        self.value.and_then(MoodLevel::from_value)
    }

    /// Whether this entry has a rating outside the known range
    pub fn is_malformed(&self) -> bool {
        matches!(self.value, Some(v) if MoodLevel::from_value(v).is_none())
    }
}

/// Format a date as a `YYYY-MM-DD` key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` key
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(instant.timestamp_millis()).unwrap_or(instant)
}

/// ISO-8601 timestamps with millisecond precision and a `Z` suffix
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
