// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Specs for `opentrack list`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn list_sample_data_by_default() {
    let temp = TempDir::new().unwrap();
    ot_in(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Login form validation not working properly",
        ))
        .stdout(predicate::str::contains("Showing 6 of 6 issues"))
        .stdout(predicate::str::contains("Filters:").not());
}

#[test]
fn list_card_shows_badges_and_metadata() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["list", "-t", "bug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🐛 Checkout button unresponsive"))
        .stdout(predicate::str::contains(
            "[⚠️ Open] [🚨 Critical] payments, safari",
        ))
        .stdout(predicate::str::contains("#aaaa1111"))
        .stdout(predicate::str::contains("@pat"));
}

#[parameterized(
    search_title = { &["-q", "csv"], 1 },
    search_description = { &["-q", "ORDER TABLE"], 2 },
    status = { &["-s", "resolved"], 1 },
    priority = { &["-p", "low"], 1 },
    issue_type = { &["-t", "enhancement"], 1 },
    combined = { &["-q", "order", "-s", "in_progress"], 1 },
    all_values = { &["-s", "all", "-p", "all", "-t", "all"], 3 },
)]
fn list_filters(args: &[&str], expected: u64) {
    let temp = configured_temp();
    let json = json_output(ot_in(&temp).arg("list").args(args).args(["-o", "json"]));
    assert_eq!(json["visibleCount"], expected);
    assert_eq!(json["totalCount"], 3);
}

#[parameterized(
    capitalized = { "Open" },
    hyphenated = { "in-progress" },
    empty = { "" },
)]
fn list_unknown_status_matches_nothing(status: &str) {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["list", "-s", status])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn list_shows_active_filter_chips() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["list", "-q", "order", "-s", "in_progress", "-t", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Filters: Search: \"order\" | Status: in progress | Type: feature",
        ));
}

#[test]
fn list_keeps_collection_order() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["list", "-o", "id"])
        .assert()
        .success()
        .stdout(
            "aaaa1111-0000-0000-0000-000000000001\n\
             bbbb2222-0000-0000-0000-000000000002\n\
             cccc3333-0000-0000-0000-000000000003\n",
        );
}

#[test]
fn list_json_uses_camel_case_records() {
    let temp = configured_temp();
    let json = json_output(ot_in(&temp).args(["list", "-p", "critical", "-o", "json"]));
    let issue = &json["issues"][0];
    assert_eq!(issue["type"], "bug");
    assert_eq!(issue["createdAt"], "2024-03-01T09:00:00Z");
    assert_eq!(json["activeFilters"], serde_json::json!(["Priority: critical"]));
}

#[test]
fn list_data_flag_overrides_config() {
    let temp = configured_temp();
    let other = TempDir::new().unwrap();
    let path = other.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    ot_in(&temp)
        .args(["list", "--data", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn list_with_directory_flag() {
    let temp = configured_temp();
    let elsewhere = TempDir::new().unwrap();
    ot_in(&elsewhere)
        .args(["-C", temp.path().to_str().unwrap(), "list", "-o", "id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aaaa1111"));
}

#[test]
fn list_missing_data_file_fails() {
    let temp = TempDir::new().unwrap();
    ot_in(&temp)
        .args(["list", "--data", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("data file not found"));
}

#[test]
fn list_corrupted_data_file_fails() {
    let temp = TempDir::new().unwrap();
    write_data(&temp, r#"[{"id": "x"}]"#);
    ot_in(&temp)
        .args(["list", "--data", "issues.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupted data in"));
}
