//! Integration tests for log, skip, today and stats

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{moodlog_cmd, read_entries, today_key};

#[test]
fn test_log_saves_today() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "great", "--activity", "exercise"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood saved successfully!"))
        .stdout(predicate::str::contains("😊 Great"))
        .stdout(predicate::str::contains("🏃 exercise"));

    let entries = read_entries(temp.path());
    let entry = &entries[&today_key()];
    assert_eq!(entry["value"], 5);
    assert_eq!(entry["mood"], "😊");
    assert_eq!(entry["label"], "Great");
    assert_eq!(entry["note"], "");
    assert_eq!(entry["activities"], serde_json::json!(["exercise"]));
    assert!(entry.get("skipped").is_none());
    assert!(entry["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_log_twice_overwrites() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "down", "-n", "rough morning"])
        .assert()
        .success();
    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "4", "-n", "  better by lunch  "])
        .assert()
        .success();

    let entries = read_entries(temp.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[&today_key()]["value"], 4);
    assert_eq!(entries[&today_key()]["note"], "better by lunch");
}

#[test]
fn test_log_invalid_mood() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "ecstatic"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("great, good, okay, down, struggling"));

    assert!(!temp.path().join(".moodlog/entries.json").exists());
}

#[test]
fn test_unknown_activity_kept_with_default_icon() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "okay", "-a", "gardening", "-a", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📝 gardening"))
        .stdout(predicate::str::contains("💼 work"));

    let entries = read_entries(temp.path());
    assert_eq!(
        entries[&today_key()]["activities"],
        serde_json::json!(["gardening", "work"])
    );
}

#[test]
fn test_skip_then_skip_again() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("skip")
        .assert()
        .success()
        .stdout(predicate::str::contains("Day skipped"));

    let entries = read_entries(temp.path());
    assert_eq!(entries[&today_key()]["skipped"], true);
    assert!(entries[&today_key()]["value"].is_null());

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("skip")
        .assert()
        .success()
        .stdout(predicate::str::contains("You already have an entry for"));
}

#[test]
fn test_log_after_skip_overwrites() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    moodlog_cmd().current_dir(temp.path()).arg("skip").assert().success();
    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "good"])
        .assert()
        .success();

    let entries = read_entries(temp.path());
    assert_eq!(entries[&today_key()]["value"], 4);
    assert!(entries[&today_key()].get("skipped").is_none());
}

#[test]
fn test_today_shows_entry() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry yet for today"));

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "good", "--note", "tea with friends", "-a", "social"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("today")
        .assert()
        .success()
        .stdout(predicate::str::contains("Today's entry"))
        .stdout(predicate::str::contains("tea with friends"))
        .stdout(predicate::str::contains("👥 social"));
}

#[test]
fn test_stats_empty() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Average mood: --"))
        .stdout(predicate::str::contains("Days tracked: 0"))
        .stdout(predicate::str::contains("Streak: 0"));
}

#[test]
fn test_stats_summary() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    common::write_entries(
        temp.path(),
        vec![
            common::rated_entry(1, 5),
            common::rated_entry(2, 4),
            common::rated_entry(3, 3),
            // Gap on day 4, outside the streak
            common::rated_entry(5, 1),
        ],
    );

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "great"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("This week"))
        .stdout(predicate::str::contains("Mood distribution"))
        // (5 + 5 + 4 + 3 + 1) / 5
        .stdout(predicate::str::contains("Average mood: 3.6"))
        .stdout(predicate::str::contains("Days tracked: 5"))
        .stdout(predicate::str::contains("Streak: 4"));
}

#[test]
fn test_malformed_records_do_not_break_stats() {
    let temp = TempDir::new().unwrap();
    common::init(temp.path());

    std::fs::write(
        temp.path().join(".moodlog/entries.json"),
        r#"{"garbage": 1, "2020-01-01": {"mood": false}}"#,
    )
    .unwrap();

    moodlog_cmd()
        .current_dir(temp.path())
        .args(["log", "okay"])
        .assert()
        .success();

    moodlog_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Days tracked: 1"));

    let entries = read_entries(temp.path());
    assert!(entries.contains_key("garbage"));
    assert!(entries.contains_key("2020-01-01"));
}
