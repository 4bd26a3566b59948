//! Mood levels and the activity vocabulary

use crate::error::{MoodError, Result};
use std::str::FromStr;

/// Ordinal mood rating, 1 (struggling) through 5 (great)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoodLevel {
    Struggling = 1,
    Down = 2,
    Okay = 3,
    Good = 4,
    Great = 5,
}

impl MoodLevel {
    /// All levels in ascending order of value
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::Struggling,
        MoodLevel::Down,
        MoodLevel::Okay,
        MoodLevel::Good,
        MoodLevel::Great,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    /// Map an ordinal back to its level; `None` outside 1..=5
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(MoodLevel::Struggling),
            2 => Some(MoodLevel::Down),
            3 => Some(MoodLevel::Okay),
            4 => Some(MoodLevel::Good),
            5 => Some(MoodLevel::Great),
            _ => None,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodLevel::Struggling => "😢",
            MoodLevel::Down => "😔",
            MoodLevel::Okay => "😐",
            MoodLevel::Good => "😌",
            MoodLevel::Great => "😊",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodLevel::Struggling => "Struggling",
            MoodLevel::Down => "Down",
            MoodLevel::Okay => "Okay",
            MoodLevel::Good => "Good",
            MoodLevel::Great => "Great",
        }
    }
}

impl FromStr for MoodLevel {
    type Err = MoodError;

    /// Accepts a level name, an ordinal or the level's emoji
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();

        if let Ok(value) = normalized.parse::<u8>() {
            return MoodLevel::from_value(value)
                .ok_or_else(|| MoodError::InvalidMood(s.to_string()));
        }

        match normalized.as_str() {
            "great" => Ok(MoodLevel::Great),
            "good" => Ok(MoodLevel::Good),
            "okay" | "ok" => Ok(MoodLevel::Okay),
            "down" => Ok(MoodLevel::Down),
            "struggling" => Ok(MoodLevel::Struggling),
            other => MoodLevel::ALL
                .into_iter()
                .find(|level| level.emoji() == other)
                .ok_or_else(|| MoodError::InvalidMood(s.to_string())),
        }
    }
}

/// Known activity tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    Exercise,
    Work,
    Social,
    Hobby,
    Rest,
    Nature,
}

/// Icon shown for tags outside the vocabulary
pub const DEFAULT_ACTIVITY_ICON: &str = "📝";

impl Activity {
    pub const ALL: [Activity; 6] = [
        Activity::Exercise,
        Activity::Work,
        Activity::Social,
        Activity::Hobby,
        Activity::Rest,
        Activity::Nature,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "exercise" => Some(Activity::Exercise),
            "work" => Some(Activity::Work),
            "social" => Some(Activity::Social),
            "hobby" => Some(Activity::Hobby),
            "rest" => Some(Activity::Rest),
            "nature" => Some(Activity::Nature),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Activity::Exercise => "exercise",
            Activity::Work => "work",
            Activity::Social => "social",
            Activity::Hobby => "hobby",
            Activity::Rest => "rest",
            Activity::Nature => "nature",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Activity::Exercise => "🏃",
            Activity::Work => "💼",
            Activity::Social => "👥",
            Activity::Hobby => "🎨",
            Activity::Rest => "😴",
            Activity::Nature => "🌿",
        }
    }
}

/// Icon for any stored tag, falling back to the default for unknown ones
pub fn activity_icon(tag: &str) -> &'static str {
    Activity::from_tag(tag)
        .map(Activity::icon)
        .unwrap_or(DEFAULT_ACTIVITY_ICON)
}
