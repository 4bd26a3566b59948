//! Derived views over the entry store
//!
//! Every function here is a pure read over an [`EntryMap`] and is recomputed
//! from scratch on each call. The seven-day window always covers `today` and
//! the six calendar days before it.

use crate::domain::entry::{EntryMap, MoodEntry};
use crate::domain::mood::MoodLevel;
use chrono::{Duration, NaiveDate};
use std::fmt;

/// Number of days in the rolling window
pub const WINDOW_DAYS: i64 = 7;

/// How far back a streak is followed
pub const STREAK_HORIZON_DAYS: i64 = 365;

/// One point of the weekly line series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekPoint {
    pub date: NaiveDate,
    /// Short weekday name, e.g. "Mon"
    pub label: String,
    pub value: Option<u8>,
}

/// Count of rated entries per mood level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Distribution {
    counts: [usize; 5],
}

impl Distribution {
    pub fn count(&self, level: MoodLevel) -> usize {
        self.counts[usize::from(level.value() - 1)]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Levels with their counts, struggling first
    pub fn iter(&self) -> impl Iterator<Item = (MoodLevel, usize)> + '_ {
        MoodLevel::ALL
            .into_iter()
            .zip(self.counts.iter().copied())
    }
}

/// Mean mood across the window, or no data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeeklyAverage {
    Value(f64),
    NoData,
}

impl fmt::Display for WeeklyAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeeklyAverage::Value(v) => write!(f, "{:.1}", v),
            WeeklyAverage::NoData => write!(f, "--"),
        }
    }
}

/// The three summary scalars shown alongside the charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklySummary {
    pub average: WeeklyAverage,
    pub days_tracked: usize,
    pub streak: u32,
}

impl WeeklySummary {
    pub fn compute(entries: &EntryMap, today: NaiveDate) -> Self {
        WeeklySummary {
            average: weekly_average(entries, today),
            days_tracked: days_tracked(entries, today),
            streak: streak(entries, today),
        }
    }
}

/// Dates in the window, oldest first
fn window_dates(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..WINDOW_DAYS)
        .rev()
        .map(move |offset| today - Duration::days(offset))
}

/// Ratings present in the window
fn window_values(entries: &EntryMap, today: NaiveDate) -> Vec<u8> {
    window_dates(today)
        .filter_map(|date| entries.get(&date))
        .filter_map(MoodEntry::level)
        .map(MoodLevel::value)
        .collect()
}

/// Seven points covering today and the six days before, oldest first
pub fn weekly_series(entries: &EntryMap, today: NaiveDate) -> Vec<WeekPoint> {
    window_dates(today)
        .map(|date| WeekPoint {
            date,
            label: date.format("%a").to_string(),
            value: entries
                .get(&date)
                .and_then(MoodEntry::level)
                .map(MoodLevel::value),
        })
        .collect()
}

/// Histogram of ratings across the whole store
pub fn distribution(entries: &EntryMap) -> Distribution {
    let mut dist = Distribution::default();
    for (date, entry) in entries {
        match entry.level() {
            Some(level) => dist.counts[usize::from(level.value() - 1)] += 1,
            None if entry.is_malformed() => {
                log::debug!(
                    "event=analytics_skip module=analytics reason=value_out_of_range date={}",
                    date
                );
            }
            None => {}
        }
    }
    dist
}

/// Consecutive days with any entry, walking back from today
pub fn streak(entries: &EntryMap, today: NaiveDate) -> u32 {
    let mut count = 0;
    for offset in 0..STREAK_HORIZON_DAYS {
        let date = today - Duration::days(offset);
        if !entries.contains_key(&date) {
            break;
        }
        count += 1;
    }
    count
}

/// Mean of the window's ratings, rounded to one decimal place
pub fn weekly_average(entries: &EntryMap, today: NaiveDate) -> WeeklyAverage {
    let values = window_values(entries, today);
    if values.is_empty() {
        return WeeklyAverage::NoData;
    }

    let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
    let mean = f64::from(sum) / values.len() as f64;
    WeeklyAverage::Value((mean * 10.0).round() / 10.0)
}

/// Number of rated entries in the window
pub fn days_tracked(entries: &EntryMap, today: NaiveDate) -> usize {
    window_values(entries, today).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn rated(value: u8) -> MoodEntry {
        MoodEntry::rated(
            MoodLevel::from_value(value).unwrap(),
            "",
            vec![],
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
        )
    }

    fn skipped() -> MoodEntry {
        MoodEntry::skipped(Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap())
    }

    /// Builds the window ending on Jan 17 from oldest to newest; `None` means skipped
    fn week(values: [Option<u8>; 7]) -> EntryMap {
        let mut entries = EntryMap::new();
        for (i, value) in values.into_iter().enumerate() {
            let date = day(11 + i as u32);
            let entry = match value {
                Some(v) => rated(v),
                None => skipped(),
            };
            entries.insert(date, entry);
        }
        entries
    }

    #[test]
    fn test_weekly_series_always_seven_points() {
        let empty = EntryMap::new();
        let series = weekly_series(&empty, day(17));
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|p| p.value.is_none()));

        let mut sparse = EntryMap::new();
        sparse.insert(day(15), rated(4));
        sparse.insert(day(2), rated(1));
        let series = weekly_series(&sparse, day(17));
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, day(11));
        assert_eq!(series[6].date, day(17));
        assert_eq!(series[4].value, Some(4));
        assert_eq!(series.iter().filter(|p| p.value.is_some()).count(), 1);
    }

    #[test]
    fn test_weekly_series_labels() {
        let series = weekly_series(&EntryMap::new(), day(17));
        // January 17, 2025 is a Friday
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"]);
    }

    #[test]
    fn test_weekly_series_skipped_is_null() {
        let mut entries = EntryMap::new();
        entries.insert(day(17), skipped());
        let series = weekly_series(&entries, day(17));
        assert_eq!(series[6].value, None);
    }

    #[test]
    fn test_distribution_counts_whole_store() {
        let mut entries = EntryMap::new();
        entries.insert(day(1), rated(5));
        entries.insert(day(2), rated(5));
        entries.insert(day(3), rated(1));
        entries.insert(day(4), skipped());
        entries.insert(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            rated(3),
        );

        let dist = distribution(&entries);
        assert_eq!(dist.count(MoodLevel::Great), 2);
        assert_eq!(dist.count(MoodLevel::Struggling), 1);
        assert_eq!(dist.count(MoodLevel::Okay), 1);
        assert_eq!(dist.count(MoodLevel::Good), 0);
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn test_distribution_ignores_out_of_range_values() {
        let mut entries = EntryMap::new();
        let mut bad = rated(3);
        bad.value = Some(7);
        entries.insert(day(1), bad);
        entries.insert(day(2), rated(2));

        let dist = distribution(&entries);
        assert_eq!(dist.total(), 1);
        assert_eq!(dist.count(MoodLevel::Down), 1);
    }

    #[test]
    fn test_streak_empty_store() {
        assert_eq!(streak(&EntryMap::new(), day(17)), 0);
    }

    #[test]
    fn test_streak_counts_skipped_and_stops_at_gap() {
        let mut entries = EntryMap::new();
        entries.insert(day(17), rated(4));
        assert_eq!(streak(&entries, day(17)), 1);

        entries.insert(day(16), skipped());
        assert_eq!(streak(&entries, day(17)), 2);

        entries.insert(day(15), rated(2));
        assert_eq!(streak(&entries, day(17)), 3);

        // Gap on the 14th
        entries.insert(day(13), rated(5));
        assert_eq!(streak(&entries, day(17)), 3);
    }

    #[test]
    fn test_streak_zero_when_today_missing() {
        let mut entries = EntryMap::new();
        entries.insert(day(16), rated(4));
        entries.insert(day(15), rated(4));
        assert_eq!(streak(&entries, day(17)), 0);
    }

    #[test]
    fn test_streak_bounded_by_horizon() {
        let today = day(17);
        let mut entries = EntryMap::new();
        for offset in 0..400 {
            entries.insert(today - Duration::days(offset), rated(3));
        }
        assert_eq!(streak(&entries, today), 365);
    }

    #[test]
    fn test_weekly_average_rounded_mean() {
        let entries = week([Some(5), Some(4), None, Some(3), None, Some(4), Some(5)]);
        assert_eq!(weekly_average(&entries, day(17)), WeeklyAverage::Value(4.2));
        assert_eq!(weekly_average(&entries, day(17)).to_string(), "4.2");
        assert_eq!(days_tracked(&entries, day(17)), 5);
    }

    #[test]
    fn test_weekly_average_rounds_to_one_decimal() {
        let mut entries = EntryMap::new();
        entries.insert(day(17), rated(5));
        entries.insert(day(16), rated(4));
        entries.insert(day(15), rated(4));
        // 13 / 3 = 4.333...
        assert_eq!(weekly_average(&entries, day(17)), WeeklyAverage::Value(4.3));
    }

    #[test]
    fn test_weekly_average_sentinel_when_all_skipped() {
        let entries = week([None; 7]);
        let avg = weekly_average(&entries, day(17));
        assert_eq!(avg, WeeklyAverage::NoData);
        assert_eq!(avg.to_string(), "--");
        assert_eq!(days_tracked(&entries, day(17)), 0);
    }

    #[test]
    fn test_window_excludes_older_entries() {
        let mut entries = EntryMap::new();
        entries.insert(day(10), rated(1));
        entries.insert(day(11), rated(5));
        assert_eq!(weekly_average(&entries, day(17)), WeeklyAverage::Value(5.0));
        assert_eq!(days_tracked(&entries, day(17)), 1);
    }

    #[test]
    fn test_summary_bundles_scalars() {
        let entries = week([Some(5), Some(4), None, Some(3), None, Some(4), Some(5)]);
        let summary = WeeklySummary::compute(&entries, day(17));
        assert_eq!(summary.average, WeeklyAverage::Value(4.2));
        assert_eq!(summary.days_tracked, 5);
        assert_eq!(summary.streak, 7);
    }
}
