// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Specs for `opentrack new`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn new_prints_created_card() {
    let temp = TempDir::new().unwrap();
    ot_in(&temp)
        .args(["new", "Crash on save", "-d", "Saving a file crashes the app"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created issue #"))
        .stdout(predicate::str::contains("🐛 Crash on save"))
        .stdout(predicate::str::contains("[⚠️ Open] [➡️ Medium]"))
        .stdout(predicate::str::contains("just now"));
}

#[test]
fn new_id_output_is_uuid_shaped() {
    let temp = TempDir::new().unwrap();
    let output = ot_in(&temp)
        .args(["new", "Task", "-d", "Desc", "-o", "id"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let id = String::from_utf8(output.stdout).unwrap();
    let lengths: Vec<usize> = id.trim().split('-').map(str::len).collect();
    assert_eq!(lengths, vec![8, 4, 4, 4, 12]);
}

#[test]
fn new_json_output() {
    let temp = configured_temp();
    let json = json_output(ot_in(&temp).args([
        "new",
        "  Dark mode  ",
        "-d",
        "Add a dark theme",
        "-t",
        "feature",
        "-p",
        "high",
        "-a",
        "jane",
        "-l",
        "ui,theme",
        "-l",
        "ui",
        "-o",
        "json",
    ]));
    assert_eq!(json["title"], "Dark mode");
    assert_eq!(json["type"], "feature");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["status"], "open");
    assert_eq!(json["assignee"], "jane");
    assert_eq!(json["reporter"], "spec.runner");
    assert_eq!(json["labels"], serde_json::json!(["ui", "theme"]));
    assert_eq!(json["createdAt"], json["updatedAt"]);
}

#[test]
fn new_reports_every_missing_field() {
    let temp = TempDir::new().unwrap();
    ot_in(&temp)
        .args(["new", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot create issue"))
        .stderr(predicate::str::contains("Please enter a title"))
        .stderr(predicate::str::contains("Please enter a description"));
}

#[test]
fn new_invalid_priority_has_hint() {
    let temp = TempDir::new().unwrap();
    ot_in(&temp)
        .args(["new", "T", "-d", "D", "-p", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid priority: 'urgent'"))
        .stderr(predicate::str::contains("hint: valid priorities are"));
}

#[test]
fn new_does_not_touch_the_data_file() {
    let temp = configured_temp();
    let before = std::fs::read_to_string(temp.path().join("issues.json")).unwrap();
    ot_in(&temp)
        .args(["new", "T", "-d", "D"])
        .assert()
        .success();
    let after = std::fs::read_to_string(temp.path().join("issues.json")).unwrap();
    assert_eq!(before, after);
}
