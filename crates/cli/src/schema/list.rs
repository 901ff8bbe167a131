// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Schema types for `opentrack list` JSON output.

use ot_core::{Issue, IssueBoard};
use schemars::JsonSchema;
use serde::Serialize;

/// JSON output structure for the list command.
#[derive(Debug, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOutputJson {
    /// Issues matching every filter, in collection order.
    pub issues: Vec<Issue>,
    /// Human-readable descriptions of the active filters.
    pub active_filters: Vec<String>,
    /// Number of issues shown.
    pub visible_count: usize,
    /// Number of issues in the whole collection.
    pub total_count: usize,
}

impl ListOutputJson {
    pub fn from_board(board: &IssueBoard) -> Self {
        let issues: Vec<Issue> = board.visible().into_iter().cloned().collect();
        ListOutputJson {
            visible_count: issues.len(),
            total_count: board.issues().len(),
            active_filters: board.active_filters(),
            issues,
        }
    }
}
