//! Entry persistence

use crate::domain::entry::{date_key, parse_date_key, EntryMap, MoodEntry};
use crate::error::{MoodError, Result};
use chrono::NaiveDate;
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store mapping calendar dates to mood entries
pub trait EntryStore {
    /// Every readable entry, oldest first
    fn get_all(&self) -> Result<EntryMap>;

    /// Insert or overwrite the entry for `date`
    fn put(&mut self, date: NaiveDate, entry: MoodEntry) -> Result<()>;

    /// Remove every entry
    fn clear(&mut self) -> Result<()>;

    /// The stored data as JSON, including records `get_all` skips
    fn snapshot(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.get_all()?)?)
    }
}

/// In-process store used for tests and as the fallback when disk storage fails
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: EntryMap,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: EntryMap) -> Self {
        MemoryStore { entries }
    }

    pub fn entries(&self) -> &EntryMap {
        &self.entries
    }
}

impl EntryStore for MemoryStore {
    fn get_all(&self) -> Result<EntryMap> {
        Ok(self.entries.clone())
    }

    fn put(&mut self, date: NaiveDate, entry: MoodEntry) -> Result<()> {
        self.entries.insert(date, entry);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        Ok(())
    }
}

/// Store backed by a single JSON object on disk
///
/// Records that fail to parse are skipped on read but left in place on write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw JSON object; a missing file is an empty object
    fn read_raw(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(unavailable(&self.path, e)),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents).map_err(|e| unavailable(&self.path, e))? {
            Value::Object(map) => Ok(map),
            _ => Err(MoodError::StorageUnavailable(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }

    /// Write via a temp file in the same directory, then rename into place
    fn write_raw(&self, map: &Map<String, Value>) -> Result<()> {
        let contents =
            serde_json::to_string(map).map_err(|e| unavailable(&self.path, e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| unavailable(&self.path, e))?;
            }
        }

        let tmp_name = format!(
            "{}.moodlog-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("entries.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents).map_err(|e| unavailable(&self.path, e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            unavailable(&self.path, e)
        })
    }
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> MoodError {
    MoodError::StorageUnavailable(format!("{}: {}", path.display(), err))
}

impl EntryStore for JsonFileStore {
    fn get_all(&self) -> Result<EntryMap> {
        let raw = self.read_raw()?;
        let mut entries = EntryMap::new();

        for (key, value) in raw {
            let Some(date) = parse_date_key(&key) else {
                debug!(
                    "event=record_skipped module=store reason=bad_date_key key={}",
                    key
                );
                continue;
            };
            match serde_json::from_value::<MoodEntry>(value) {
                Ok(entry) if entry.is_malformed() => {
                    debug!(
                        "event=record_skipped module=store reason=value_out_of_range key={} value={:?}",
                        key, entry.value
                    );
                }
                Ok(entry) => {
                    entries.insert(date, entry);
                }
                Err(e) => {
                    debug!(
                        "event=record_skipped module=store reason=bad_record key={} error={}",
                        key, e
                    );
                }
            }
        }

        Ok(entries)
    }

    fn snapshot(&self) -> Result<Value> {
        Ok(Value::Object(self.read_raw()?))
    }

    fn put(&mut self, date: NaiveDate, entry: MoodEntry) -> Result<()> {
        let mut raw = self.read_raw()?;
        let value = serde_json::to_value(&entry).map_err(|e| unavailable(&self.path, e))?;
        raw.insert(date_key(date), value);
        self.write_raw(&raw)?;
        info!(
            "event=entry_written module=store status=ok date={} skipped={}",
            date, entry.skipped
        );
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(unavailable(&self.path, e)),
        }
        info!("event=store_cleared module=store status=ok");
        Ok(())
    }
}
