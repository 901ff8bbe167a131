// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Specs for `opentrack show`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[parameterized(
    full_id = { "aaaa1111-0000-0000-0000-000000000001" },
    short_id = { "aaaa1111" },
    prefix = { "aa" },
)]
fn show_resolves_ids(id: &str) {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["show", id, "-o", "id"])
        .assert()
        .success()
        .stdout("aaaa1111-0000-0000-0000-000000000001\n");
}

#[test]
fn show_text_details() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["show", "aaaa1111"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[🐛 Bug] Checkout button unresponsive\n",
        ))
        .stdout(predicate::str::contains("Status:   [⚠️ Open]"))
        .stdout(predicate::str::contains("Reporter: @sam"))
        .stdout(predicate::str::contains("Assignee: @pat"))
        .stdout(predicate::str::contains("Created:  Mar 1, 2024"))
        .stdout(predicate::str::contains("Labels:   payments, safari"))
        .stdout(predicate::str::contains(
            "@sam created this issue · Mar 1, 2024, 9:00 AM",
        ))
        .stdout(predicate::str::contains(
            "@pat updated this issue · Mar 2, 2024, 3:45 PM",
        ));
}

#[test]
fn show_unassigned_issue_has_no_assignee_row() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["show", "bbbb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Assignee:").not())
        .stdout(predicate::str::contains("updated this issue").not());
}

#[test]
fn show_json() {
    let temp = configured_temp();
    let json = json_output(ot_in(&temp).args(["show", "cccc", "-o", "json"]));
    assert_eq!(json["shortId"], "cccc3333");
    assert_eq!(json["type"], "enhancement");
    assert_eq!(json["activity"][1]["user"], "sam");
    assert_eq!(json["activity"][1]["kind"], "updated");
}

#[test]
fn show_unknown_id_fails() {
    let temp = configured_temp();
    ot_in(&temp)
        .args(["show", "zzzz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("issue not found: zzzz"));
}

#[test]
fn show_ambiguous_prefix_fails() {
    let temp = TempDir::new().unwrap();
    let data = SMALL_DATASET.replace("bbbb2222", "aaaa2222");
    write_data(&temp, &data);
    ot_in(&temp)
        .args(["show", "aaaa", "--data", "issues.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ambiguous issue ID 'aaaa'"));
}
