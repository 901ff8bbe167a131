// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The binary with color and log output pinned off.
pub fn ot() -> Command {
    let mut cmd = cargo_bin_cmd!("opentrack");
    cmd.env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("OPENTRACK_LOG");
    cmd
}

/// The binary run from a fresh empty directory (sample data, default config).
pub fn ot_in(temp: &TempDir) -> Command {
    let mut cmd = ot();
    cmd.current_dir(temp.path());
    cmd
}

/// Three issues covering every filter dimension.
pub const SMALL_DATASET: &str = r#"[
  {
    "id": "aaaa1111-0000-0000-0000-000000000001",
    "title": "Checkout button unresponsive",
    "description": "Clicking Pay does nothing on Safari.",
    "type": "bug",
    "priority": "critical",
    "status": "open",
    "assignee": "pat",
    "reporter": "sam",
    "createdAt": "2024-03-01T09:00:00Z",
    "updatedAt": "2024-03-02T15:45:00Z",
    "labels": ["payments", "safari"]
  },
  {
    "id": "bbbb2222-0000-0000-0000-000000000002",
    "title": "Export to CSV",
    "description": "Allow exporting the order table.",
    "type": "feature",
    "priority": "low",
    "status": "in_progress",
    "reporter": "kim",
    "createdAt": "2024-03-03T12:00:00Z",
    "updatedAt": "2024-03-03T12:00:00Z"
  },
  {
    "id": "cccc3333-0000-0000-0000-000000000003",
    "title": "Speed up search",
    "description": "Queries over large order tables are slow.",
    "type": "enhancement",
    "priority": "medium",
    "status": "resolved",
    "reporter": "sam",
    "createdAt": "2024-02-20T08:30:00Z",
    "updatedAt": "2024-02-25T10:00:00Z",
    "labels": []
  }
]"#;

/// Write `content` as `issues.json` in `temp` and return its path.
pub fn write_data(temp: &TempDir, content: &str) -> PathBuf {
    let path = temp.path().join("issues.json");
    fs::write(&path, content).unwrap();
    path
}

/// Temp dir holding the small dataset, wired up through `opentrack.toml`.
pub fn configured_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_data(&temp, SMALL_DATASET);
    fs::write(
        temp.path().join("opentrack.toml"),
        "data = \"issues.json\"\nreporter = \"spec.runner\"\n",
    )
    .unwrap();
    temp
}

/// Run a command and parse its stdout as JSON.
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
