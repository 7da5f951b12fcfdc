//! Integration tests for writing, editing and styling entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{daystory_cmd, write_entry};

fn diary() -> TempDir {
    let temp = TempDir::new().unwrap();
    daystory_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_write_and_show() {
    let temp = diary();

    write_entry(
        temp.path(),
        &[
            "--date",
            "2025-01-17",
            "--tag",
            "walk",
            "--image",
            "file:///park.jpg",
            "  A walk in the park  ",
        ],
    );

    daystory_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-01-17 (Fri)"))
        .stdout(predicate::str::contains("A walk in the park\n"))
        .stdout(predicate::str::contains("Photos: file:///park.jpg"))
        .stdout(predicate::str::contains("Tags: #walk"));
}

#[test]
fn test_write_blank_text_fails() {
    let temp = diary();

    daystory_cmd()
        .current_dir(temp.path())
        .args(["write", "   "])
        .assert()
        .code(5);
}

#[test]
fn test_write_invalid_date_fails() {
    let temp = diary();

    daystory_cmd()
        .current_dir(temp.path())
        .args(["write", "--date", "2023-02-29", "text"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_show_empty_day() {
    let temp = diary();

    daystory_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries for 2025-01-01"));
}

#[test]
fn test_edit_moves_highlight() {
    let temp = diary();
    let id = write_entry(temp.path(), &["--date", "2025-01-17", "hello world"]);

    daystory_cmd()
        .current_dir(temp.path())
        .args(["highlight", &id, "6", "11", "--color", "#a0d8ef"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry"));

    daystory_cmd()
        .current_dir(temp.path())
        .args(["edit", &id, "hello there world"])
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".daystory/entries.toml")).unwrap();
    assert!(content.contains("hello there world"));
    assert!(content.contains("start = 12"));
    assert!(content.contains("end = 17"));
    assert!(content.contains("#a0d8ef"));
}

#[test]
fn test_strike_toggles() {
    let temp = diary();
    let id = write_entry(temp.path(), &["--date", "2025-01-17", "hello world"]);

    daystory_cmd()
        .current_dir(temp.path())
        .args(["strike", &id, "0", "5"])
        .assert()
        .success();
    daystory_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 strikethrough(s)"));

    daystory_cmd()
        .current_dir(temp.path())
        .args(["strike", &id, "0", "5"])
        .assert()
        .success();
    daystory_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-01-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 strikethrough(s)"));
}

#[test]
fn test_empty_selection_is_noop() {
    let temp = diary();
    let id = write_entry(temp.path(), &["--date", "2025-01-17", "hello"]);

    daystory_cmd()
        .current_dir(temp.path())
        .args(["strike", &id, "2", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"));

    daystory_cmd()
        .current_dir(temp.path())
        .args(["highlight", &id, "0", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do"));
}

#[test]
fn test_highlight_unknown_color_fails() {
    let temp = diary();
    let id = write_entry(temp.path(), &["--date", "2025-01-17", "hello"]);

    daystory_cmd()
        .current_dir(temp.path())
        .args(["highlight", &id, "0", "2", "--color", "red"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Valid colors"));
}

#[test]
fn test_edit_unknown_entry_fails() {
    let temp = diary();

    daystory_cmd()
        .current_dir(temp.path())
        .args(["edit", "missing", "text"])
        .assert()
        .code(4);
}

#[test]
fn test_wipe_requires_confirmation() {
    let temp = diary();
    write_entry(temp.path(), &["--date", "2025-01-17", "keep me"]);

    daystory_cmd()
        .current_dir(temp.path())
        .arg("wipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("--yes"));
    daystory_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-01-17"])
        .assert()
        .stdout(predicate::str::contains("keep me"));

    daystory_cmd()
        .current_dir(temp.path())
        .args(["wipe", "--yes"])
        .assert()
        .success();
    daystory_cmd()
        .current_dir(temp.path())
        .args(["show", "2025-01-17"])
        .assert()
        .stdout(predicate::str::contains("No entries"));
}
