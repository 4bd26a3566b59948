#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{Duration, Local, SecondsFormat, Utc};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_LOG");
    cmd
}

/// Initialize a tracker in `path`
pub fn init(path: &Path) {
    moodlog_cmd().arg("init").arg(path).assert().success();
}

/// A rated entry captured `days_ago` days before now, keyed by its local date
pub fn rated_entry(days_ago: i64, value: u8) -> (String, Value) {
    let captured = Utc::now() - Duration::days(days_ago);
    let key = (Local::now() - Duration::days(days_ago))
        .date_naive()
        .format("%Y-%m-%d")
        .to_string();
    let entry = json!({
        "mood": "😐",
        "value": value,
        "label": "Mood",
        "note": format!("{} days ago", days_ago),
        "activities": [],
        "timestamp": captured.to_rfc3339_opts(SecondsFormat::Millis, true),
    });
    (key, entry)
}

/// Overwrite the tracker's entry file
pub fn write_entries(path: &Path, entries: Vec<(String, Value)>) {
    let map: Map<String, Value> = entries.into_iter().collect();
    fs::write(
        path.join(".moodlog").join("entries.json"),
        serde_json::to_string_pretty(&Value::Object(map)).unwrap(),
    )
    .unwrap();
}

/// Parse the tracker's entry file
pub fn read_entries(path: &Path) -> Map<String, Value> {
    let contents = fs::read_to_string(path.join(".moodlog").join("entries.json")).unwrap();
    match serde_json::from_str(&contents).unwrap() {
        Value::Object(map) => map,
        other => panic!("entries.json is not an object: {}", other),
    }
}

pub fn today_key() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
