// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Issue detail view model: lookup, activity timeline and status updates.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::filter::IssueBoard;
use crate::issue::{Issue, Status};

/// Kind of entry in an issue's activity timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Created,
    Updated,
}

impl ActivityKind {
    pub fn description(&self) -> &'static str {
        match self {
            ActivityKind::Created => "created this issue",
            ActivityKind::Updated => "updated this issue",
        }
    }
}

/// One entry in an issue's activity timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub kind: ActivityKind,
    /// User handle credited with the activity.
    pub user: String,
    pub at: DateTime<Utc>,
}

/// Build the activity timeline shown on the detail page.
///
/// Always starts with the creation by the reporter. An update entry follows
/// when the issue was modified after creation, credited to the assignee if
/// there is one and the reporter otherwise. A blank assignee counts as none.
pub fn activity_timeline(issue: &Issue) -> Vec<Activity> {
    let mut timeline = vec![Activity {
        kind: ActivityKind::Created,
        user: issue.reporter.clone(),
        at: issue.created_at,
    }];

    if issue.updated_at != issue.created_at {
        timeline.push(Activity {
            kind: ActivityKind::Updated,
            user: issue
                .assignee
                .as_deref()
                .filter(|assignee| !assignee.trim().is_empty())
                .unwrap_or(&issue.reporter)
                .to_string(),
            at: issue.updated_at,
        });
    }

    timeline
}

/// Outcome of a status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub id: String,
    pub from: Status,
    pub to: Status,
    pub updated_at: DateTime<Utc>,
}

impl StatusChange {
    /// Confirmation shown after the update.
    pub fn message(&self) -> String {
        format!("Issue status updated to {}", self.to.badge().label)
    }
}

impl IssueBoard {
    /// Find an issue by full id or by a unique id prefix.
    pub fn resolve(&self, id: &str) -> Result<&Issue> {
        let index = self.position(id)?;
        Ok(&self.issues[index])
    }

    /// Replace an issue with a copy carrying the new status.
    ///
    /// The visible set is recomputed since the status filter may no longer
    /// match.
    pub fn update_status(
        &mut self,
        id: &str,
        status: Status,
        now: DateTime<Utc>,
    ) -> Result<StatusChange> {
        let index = self.position(id)?;
        let current = &self.issues[index];
        if current.status == status {
            return Err(Error::StatusUnchanged {
                id: current.id.clone(),
                status: status.to_string(),
            });
        }

        let updated = current.with_status(status, now);
        let change = StatusChange {
            id: updated.id.clone(),
            from: current.status,
            to: status,
            updated_at: updated.updated_at,
        };
        self.issues[index] = updated;
        self.recompute();

        tracing::info!(id = %change.id, from = %change.from, to = %change.to, "issue status updated");
        Ok(change)
    }

    /// Append a new issue. Ids must be unique within the board.
    pub fn add(&mut self, issue: Issue) -> Result<()> {
        if self.get(&issue.id).is_some() {
            return Err(Error::DuplicateId(issue.id));
        }
        tracing::info!(id = %issue.id, "issue added");
        self.issues.push(issue);
        self.recompute();
        Ok(())
    }

    fn position(&self, id: &str) -> Result<usize> {
        if let Some(index) = self.issues.iter().position(|issue| issue.id == id) {
            return Ok(index);
        }

        let matches: Vec<usize> = self
            .issues
            .iter()
            .enumerate()
            .filter(|(_, issue)| !id.is_empty() && issue.id.starts_with(id))
            .map(|(i, _)| i)
            .collect();

        match matches.as_slice() {
            [] => Err(Error::IssueNotFound(id.to_string())),
            [index] => Ok(*index),
            _ => Err(Error::AmbiguousId {
                prefix: id.to_string(),
                matches: matches.iter().map(|&i| self.issues[i].id.clone()).collect(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
