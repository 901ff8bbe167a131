// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Specs for `opentrack.toml`, logging and the global flags.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use std::fs;

#[test]
fn config_data_path_is_relative_to_config_dir() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/issues.json"), SMALL_DATASET).unwrap();
    fs::write(
        temp.path().join("opentrack.toml"),
        "data = \"data/issues.json\"\n",
    )
    .unwrap();

    ot_in(&temp)
        .args(["stats", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 3"));
}

#[test]
fn config_reporter_defaults_to_anonymous() {
    let temp = TempDir::new().unwrap();
    let json = json_output(ot_in(&temp).args(["new", "T", "-d", "D", "-o", "json"]));
    assert_eq!(json["reporter"], "anonymous");
}

#[test]
fn config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("opentrack.toml"), "prefix = \"ot\"\n").unwrap();
    ot_in(&temp)
        .arg("stats")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn config_missing_configured_file_has_hint() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("opentrack.toml"), "data = \"gone.json\"\n").unwrap();
    ot_in(&temp)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gone.json"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn logging_goes_to_stderr_only() {
    let temp = TempDir::new().unwrap();
    ot_in(&temp)
        .env("OPENTRACK_LOG", "debug")
        .args(["list", "-o", "id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("session opened"));
}

#[test]
fn quiet_by_default() {
    let temp = TempDir::new().unwrap();
    ot_in(&temp)
        .arg("stats")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
