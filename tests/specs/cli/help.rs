// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Specs for help, version, schema and completion output.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn help_lists_commands() {
    ot().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Issues:"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn help_output_is_plain_without_tty() {
    ot().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[parameterized(
    short = { "-v" },
    upper = { "-V" },
    long = { "--version" },
)]
fn version_flags(flag: &str) {
    ot().arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[parameterized(
    list = { "list", "ListOutputJson" },
    show = { "show", "IssueDetailsJson" },
    stats = { "stats", "SummaryCounts" },
)]
fn schema_outputs(name: &str, title: &str) {
    let json = json_output(ot().args(["schema", name]));
    assert_eq!(json["title"], title);
}

#[test]
fn schema_ignores_broken_data_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("opentrack.toml"), "data = \"gone.json\"\n").unwrap();
    ot_in(&temp).args(["schema", "list"]).assert().success();
}

#[test]
fn completion_bash() {
    ot().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("opentrack"));
}

#[test]
fn unknown_command_fails() {
    ot().arg("frobnicate").assert().failure();
}
