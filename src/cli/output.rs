//! Output formatting utilities

use crate::application::{DashboardView, Notice, NoticeLevel};
use crate::domain::entry::MoodEntry;
use crate::domain::mood::activity_icon;
use crate::domain::{Page, WeeklySummary};
use crate::infrastructure::ChartRenderer;
use chrono::NaiveDate;

/// Long date heading, e.g. "Friday, January 17, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn format_activities(activities: &[String]) -> String {
    activities
        .iter()
        .map(|tag| format!("{} {}", activity_icon(tag), tag))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a single entry card
pub fn format_entry(entry: &MoodEntry) -> String {
    let mut output = format!("{} {}\n", entry.mood, entry.label);
    if entry.note.is_empty() {
        output.push_str("No note added\n");
    } else {
        output.push_str(&format!("{}\n", entry.note));
    }
    if !entry.activities.is_empty() {
        output.push_str(&format!("{}\n", format_activities(&entry.activities)));
    }
    output
}

/// Format today's entry, or the placeholder when there is none
pub fn format_today(today: Option<&MoodEntry>) -> String {
    match today {
        Some(entry) => format!("Today's entry\n{}", format_entry(entry)),
        None => "No entry yet for today\nTrack your mood to see it here\n".to_string(),
    }
}

/// Format a page of the entry list
pub fn format_entry_page(page: &Page) -> String {
    if page.is_empty() {
        return "No entries found\n".to_string();
    }

    let mut output = String::new();
    for (date, entry) in &page.entries {
        let note = if entry.note.is_empty() {
            "No note"
        } else {
            entry.note.as_str()
        };
        output.push_str(&format!(
            "{}  {} {}  {}",
            format_date(*date),
            entry.mood,
            entry.label,
            note
        ));
        if !entry.activities.is_empty() {
            output.push_str(&format!("  [{}]", format_activities(&entry.activities)));
        }
        output.push('\n');
    }

    if page.has_more {
        output.push_str(&format!(
            "More entries: use --page {}\n",
            page.page_index + 2
        ));
    }
    output
}

/// Format the three summary scalars
pub fn format_summary(summary: &WeeklySummary) -> String {
    format!(
        "Average mood: {}\nDays tracked: {}\nStreak: {}\n",
        summary.average, summary.days_tracked, summary.streak
    )
}

/// Format the analytics section of the dashboard
pub fn format_stats<R: ChartRenderer>(dashboard: &DashboardView, chart: &R) -> String {
    format!(
        "This week\n{}\nMood distribution\n{}\n{}",
        chart.line(&dashboard.weekly),
        chart.distribution(&dashboard.distribution),
        format_summary(&dashboard.summary)
    )
}

/// Prefix a notice by its level
pub fn format_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success | NoticeLevel::Info => notice.message.clone(),
        NoticeLevel::Error => format!("Warning: {}", notice.message),
    }
}
