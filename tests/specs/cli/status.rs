// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Specs for `opentrack status`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

#[test]
fn status_update_prints_confirmation() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["status", "aaaa", "resolved"])
        .assert()
        .success()
        .stdout("Issue status updated to Resolved\n#aaaa1111: Open → Resolved\n");
}

#[test]
fn status_same_value_is_rejected() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["status", "bbbb", "in_progress"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is already in_progress"));
}

#[test]
fn status_invalid_value_has_hint() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["status", "aaaa", "done"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid status: 'done'"))
        .stderr(predicate::str::contains("hint: valid statuses are"));
}

#[test]
fn status_unknown_issue() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["status", "ffff", "closed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("issue not found"));
}

#[test]
fn status_change_is_not_persisted() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["status", "aaaa", "closed"])
        .assert()
        .success();
    ot_in(&temp)
        .args(["show", "aaaa"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[⚠️ Open]"));
}
