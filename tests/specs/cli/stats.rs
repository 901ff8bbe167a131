// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Specs for `opentrack stats`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use similar_asserts::assert_eq;

#[test]
fn stats_sample_data() {
    let temp = TempDir::new().unwrap();
    let output = ot_in(&temp).arg("stats").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Total Issues  6\nOpen          2\nIn Progress   2\nResolved      1\n"
    );
}

#[test]
fn stats_json() {
    let temp = configured_temp();
    let json = json_output(ot_in(&temp).args(["stats", "-o", "json"]));
    assert_eq!(
        json,
        serde_json::json!({"total": 3, "open": 1, "inProgress": 1, "resolved": 1})
    );
}

#[test]
fn stats_closed_counts_only_toward_total() {
    let temp = TempDir::new().unwrap();
    let data = SMALL_DATASET.replace("\"resolved\"", "\"closed\"");
    write_data(&temp, &data);
    let json = json_output(ot_in(&temp).args(["stats", "--data", "issues.json", "-o", "json"]));
    assert_eq!(json["total"], 3);
    assert_eq!(json["resolved"], 0);
}

#[test]
fn stats_empty_collection() {
    let temp = TempDir::new().unwrap();
    write_data(&temp, "[]");
    let json = json_output(ot_in(&temp).args(["stats", "--data", "issues.json", "-o", "json"]));
    assert_eq!(json["total"], 0);
}
