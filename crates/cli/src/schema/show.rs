// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Schema types for `opentrack show` JSON output.

use ot_core::{activity_timeline, short_id, Activity, Issue};
use schemars::JsonSchema;
use serde::Serialize;

/// Full issue record plus the derived detail-page fields.
#[derive(Debug, JsonSchema, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetailsJson {
    #[serde(flatten)]
    pub issue: Issue,
    /// First eight characters of the id, as shown in lists.
    pub short_id: String,
    /// Creation and last-update entries, oldest first.
    pub activity: Vec<Activity>,
}

impl IssueDetailsJson {
    pub fn new(issue: &Issue) -> Self {
        IssueDetailsJson {
            short_id: short_id(&issue.id).to_string(),
            activity: activity_timeline(issue),
            issue: issue.clone(),
        }
    }
}
