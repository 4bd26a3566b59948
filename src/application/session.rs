//! Mood check-in session
//!
//! The session owns the in-progress submission (chosen mood, activity tags,
//! note) and is the only writer of the entry store. Every mutating command
//! writes to the store first and then recomputes the full dashboard.
//!
//! When the store fails, the session falls back to an in-memory mirror for the
//! rest of its lifetime and reports the failure once as a [`Notice`].

use crate::domain::analytics::{self, Distribution, WeekPoint, WeeklySummary};
use crate::domain::entry::{date_key, EntryMap, MoodEntry};
use crate::domain::query::{Page, Window};
use crate::domain::MoodLevel;
use crate::error::{MoodError, Result};
use crate::infrastructure::config::DEFAULT_PAGE_SIZE;
use crate::infrastructure::{Config, EntryStore, MemoryStore};
use chrono::{DateTime, Local, NaiveDate, Utc};
use log::info;
use std::fmt;

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Where the in-progress submission stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    MoodChosen(MoodLevel),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Message for the user after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Everything the display layer shows, recomputed after each mutation
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub today: NaiveDate,
    pub today_entry: Option<MoodEntry>,
    pub weekly: Vec<WeekPoint>,
    pub distribution: Distribution,
    pub summary: WeeklySummary,
    pub entries: Page,
}

/// Result of a command: the fresh dashboard plus notices to show
#[derive(Debug, Clone, PartialEq)]
pub struct Refresh {
    pub dashboard: DashboardView,
    pub notices: Vec<Notice>,
}

/// A downloadable snapshot of the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub contents: String,
}

enum Mutation {
    Put(NaiveDate, MoodEntry),
    Clear,
}

impl Mutation {
    fn apply<S: EntryStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        match self {
            Mutation::Put(date, entry) => store.put(*date, entry.clone()),
            Mutation::Clear => store.clear(),
        }
    }
}

pub struct MoodSession<S: EntryStore, C: Clock = SystemClock> {
    store: S,
    mirror: MemoryStore,
    degraded: bool,
    clock: C,
    state: SessionState,
    activities: Vec<String>,
    note: String,
    window: Window,
    page_size: usize,
    page_index: usize,
    pending: Vec<Notice>,
}

impl<S: EntryStore, C: Clock> MoodSession<S, C> {
    /// Open a session over `store`, reading it once to seed the fallback mirror
    pub fn new(store: S, clock: C) -> Self {
        let mut session = MoodSession {
            store,
            mirror: MemoryStore::new(),
            degraded: false,
            clock,
            state: SessionState::Idle,
            activities: Vec::new(),
            note: String::new(),
            window: Window::All,
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
            pending: Vec::new(),
        };
        session.load();
        session
    }

    /// Open a session using the page size and window from `config`
    pub fn with_config(store: S, clock: C, config: &Config) -> Self {
        let mut session = Self::new(store, clock);
        session.page_size = config.page_size.max(1);
        session.window = config.default_window;
        session
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn activities(&self) -> &[String] {
        &self.activities
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Whether the store has failed and the session runs in memory only
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    pub fn select_mood(&mut self, level: MoodLevel) {
        self.state = SessionState::MoodChosen(level);
    }

    /// Toggle a tag in the selection, returning whether it is now selected
    ///
    /// Tags are trimmed and lowercased; unknown tags are accepted.
    pub fn toggle_activity(&mut self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            return false;
        }

        if let Some(pos) = self.activities.iter().position(|t| *t == tag) {
            self.activities.remove(pos);
            false
        } else {
            self.activities.push(tag);
            true
        }
    }

    pub fn set_note(&mut self, note: &str) {
        self.note = note.to_string();
    }

    /// Record today's mood from the current selection
    pub fn save(&mut self) -> Result<Refresh> {
        let SessionState::MoodChosen(level) = self.state else {
            return Err(MoodError::NoMoodSelected);
        };

        let now = self.clock.now();
        let today = now.date_naive();
        let entry = MoodEntry::rated(
            level,
            &self.note,
            self.activities.clone(),
            now.with_timezone(&Utc),
        );

        self.write(Mutation::Put(today, entry));
        self.reset_form();
        info!(
            "event=mood_saved module=session status=ok date={} value={}",
            today,
            level.value()
        );

        Ok(self.refresh_with(Notice::success("Mood saved successfully! 🎉")))
    }

    /// Mark today as skipped unless it already has an entry
    pub fn skip(&mut self) -> Result<Refresh> {
        let now = self.clock.now();
        let today = now.date_naive();

        if self.load().contains_key(&today) {
            return Err(MoodError::AlreadyRecorded(today));
        }

        self.write(Mutation::Put(today, MoodEntry::skipped(now.with_timezone(&Utc))));
        info!("event=day_skipped module=session status=ok date={}", today);

        Ok(self.refresh_with(Notice::info("Day skipped")))
    }

    /// Serialize the whole store for download, unreadable records included
    pub fn export_snapshot(&mut self) -> Result<Export> {
        let snapshot = if self.degraded {
            self.mirror.snapshot()?
        } else {
            match self.store.snapshot() {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    self.degrade(&e);
                    self.mirror.snapshot()?
                }
            }
        };
        let contents = serde_json::to_string_pretty(&snapshot)?;
        Ok(Export {
            filename: format!("mood-data-{}.json", date_key(self.today())),
            contents,
        })
    }

    /// Wipe every entry once `confirm` agrees; `None` when declined
    pub fn clear_all<F>(&mut self, confirm: F) -> Option<Refresh>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            info!("event=clear_declined module=session");
            return None;
        }

        self.write(Mutation::Clear);
        self.reset_form();
        info!("event=store_cleared module=session status=ok");

        Some(self.refresh_with(Notice::info("All data cleared")))
    }

    /// Change the list filter and return its first page
    pub fn set_window(&mut self, window: Window) -> Page {
        self.window = window;
        self.page(0)
    }

    /// Next page of the current filter
    pub fn load_more(&mut self) -> Page {
        let next = self.page_index.saturating_add(1);
        self.page(next)
    }

    /// A specific page of the current filter, recomputed from the store
    pub fn page(&mut self, page_index: usize) -> Page {
        self.page_index = page_index;
        let entries = self.load();
        Page::load(
            &entries,
            self.window,
            self.clock.now().with_timezone(&Utc),
            self.page_size,
            page_index,
        )
    }

    /// Recompute every derived view
    pub fn refresh(&mut self) -> Refresh {
        self.page_index = 0;
        let entries = self.load();
        let now = self.clock.now();
        let today = now.date_naive();

        let dashboard = DashboardView {
            today,
            today_entry: entries.get(&today).cloned(),
            weekly: analytics::weekly_series(&entries, today),
            distribution: analytics::distribution(&entries),
            summary: WeeklySummary::compute(&entries, today),
            entries: Page::load(
                &entries,
                self.window,
                now.with_timezone(&Utc),
                self.page_size,
                0,
            ),
        };

        Refresh {
            dashboard,
            notices: std::mem::take(&mut self.pending),
        }
    }

    /// Notices raised since the last refresh
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.pending)
    }

    fn refresh_with(&mut self, notice: Notice) -> Refresh {
        let mut refresh = self.refresh();
        refresh.notices.push(notice);
        refresh
    }

    fn reset_form(&mut self) {
        self.state = SessionState::Idle;
        self.activities.clear();
        self.note.clear();
    }

    /// Current entries, from the store or the mirror once degraded
    fn load(&mut self) -> EntryMap {
        if !self.degraded {
            match self.store.get_all() {
                Ok(entries) => {
                    self.mirror = MemoryStore::with_entries(entries.clone());
                    return entries;
                }
                Err(e) => self.degrade(&e),
            }
        }
        self.mirror.entries().clone()
    }

    /// Apply a mutation to the store and the mirror
    fn write(&mut self, mutation: Mutation) {
        if !self.degraded {
            if let Err(e) = mutation.apply(&mut self.store) {
                self.degrade(&e);
            }
        }
        // The mirror is in-memory and cannot fail
        let _ = mutation.apply(&mut self.mirror);
    }

    fn degrade(&mut self, err: &MoodError) {
        self.degraded = true;
        info!(
            "event=storage_degraded module=session status=error error={}",
            err
        );
        self.pending.push(Notice::error(format!(
            "{}. Changes are kept in memory for this session only.",
            err
        )));
    }
}
