// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Issue collections: parsing JSON issue lists and the bundled sample data.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::issue::Issue;

const SAMPLE_ISSUES: &str = include_str!("../data/sample_issues.json");

/// Parse a JSON array of issues, checking each record and id uniqueness.
pub fn parse_issues(json: &str) -> Result<Vec<Issue>> {
    let issues: Vec<Issue> = serde_json::from_str(json)?;

    let mut seen: HashSet<&str> = HashSet::with_capacity(issues.len());
    for issue in &issues {
        issue.validate()?;
        if !seen.insert(&issue.id) {
            return Err(Error::DuplicateId(issue.id.clone()));
        }
    }

    tracing::debug!(count = issues.len(), "parsed issue collection");
    Ok(issues)
}

/// The six demo issues the dashboard ships with.
pub fn sample_issues() -> Result<Vec<Issue>> {
    parse_issues(SAMPLE_ISSUES)
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
