// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Core issue types for the OpenTrack issue tracker.
//!
//! This module contains the fundamental data types: Issue, IssueType,
//! Priority, Status and Labels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A closed set of values an issue can be categorized by.
///
/// Implemented by [`IssueType`], [`Priority`] and [`Status`] so the filter
/// engine can treat the three dropdowns uniformly.
pub trait Category: Copy + PartialEq + fmt::Debug + 'static {
    /// Every value, in display order.
    const ALL: &'static [Self];

    /// Returns the string representation used in storage and filters.
    fn as_str(&self) -> &'static str;

    /// Exact (case-sensitive) lookup by storage string.
    fn from_raw(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.as_str() == raw)
    }
}

/// Classification of issues by their nature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Defect or problem to fix.
    Bug,
    /// New capability requested by users.
    Feature,
    /// Improvement to something that already works.
    Enhancement,
    /// Standard unit of work.
    Task,
}

impl Category for IssueType {
    const ALL: &'static [Self] = &[
        IssueType::Bug,
        IssueType::Feature,
        IssueType::Enhancement,
        IssueType::Task,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            IssueType::Bug => "bug",
            IssueType::Feature => "feature",
            IssueType::Enhancement => "enhancement",
            IssueType::Task => "task",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bug" => Ok(IssueType::Bug),
            "feature" => Ok(IssueType::Feature),
            "enhancement" => Ok(IssueType::Enhancement),
            "task" => Ok(IssueType::Task),
            _ => Err(Error::InvalidIssueType(s.to_string())),
        }
    }
}

/// How urgently an issue needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Category for Priority {
    const ALL: &'static [Self] = &[
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Workflow status of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Reported and not yet picked up. Initial state for new issues.
    Open,
    /// Currently being worked on.
    InProgress,
    /// Fixed or implemented, awaiting confirmation.
    Resolved,
    /// No further work expected.
    Closed,
}

impl Category for Status {
    const ALL: &'static [Self] = &[
        Status::Open,
        Status::InProgress,
        Status::Resolved,
        Status::Closed,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
            Status::Closed => "closed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in_progress" | "in-progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Free-text tags on an issue.
///
/// Insertion order is preserved and duplicates are rejected. Entries are
/// stored trimmed and are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(transparent))]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Labels(Vec<String>);

impl Labels {
    pub fn new() -> Self {
        Labels(Vec::new())
    }

    /// Add a label. Returns false if it was blank or already present.
    pub fn insert(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.contains(label) {
            return false;
        }
        self.0.push(label.to_string());
        true
    }

    /// Remove a label. Returns false if it was not present.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != label);
        self.0.len() != before
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|existing| existing == label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Parse the comma-separated form used by form submissions.
    pub fn from_csv(csv: &str) -> Self {
        csv.split(',').collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Labels {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut labels = Labels::new();
        for label in iter {
            labels.insert(label.as_ref());
        }
        labels
    }
}

impl From<Vec<String>> for Labels {
    fn from(value: Vec<String>) -> Self {
        value.into_iter().collect()
    }
}

impl From<Labels> for Vec<String> {
    fn from(value: Labels) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a Labels {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Trimmed assignee handle, or `None` when blank.
pub(crate) fn normalize_assignee(raw: &str) -> Option<String> {
    match raw.trim() {
        "" => None,
        name => Some(name.to_string()),
    }
}

/// Deserialize an explicit `null` as the default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|raw| normalize_assignee(&raw)))
}

/// The primary entity representing a tracked work item.
///
/// Issues are replaced wholesale rather than edited in place; see
/// [`Issue::with_status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Opaque unique identifier.
    pub id: String,
    /// Short summary of the problem or request.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Classification of the issue.
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub priority: Priority,
    /// Current workflow state.
    pub status: Status,
    /// User handle the issue is assigned to. Blank handles read as unassigned.
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "schemars", schemars(with = "Option<String>"))]
    pub assignee: Option<String>,
    /// User handle of whoever reported the issue.
    pub reporter: String,
    pub created_at: DateTime<Utc>,
    /// Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[cfg_attr(feature = "schemars", schemars(with = "Labels"))]
    pub labels: Labels,
}

impl Issue {
    /// Creates a new open issue with no assignee or labels.
    pub fn new(
        id: String,
        title: String,
        description: String,
        issue_type: IssueType,
        priority: Priority,
        reporter: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Issue {
            id,
            title,
            description,
            issue_type,
            priority,
            status: Status::Open,
            assignee: None,
            reporter,
            created_at,
            updated_at: created_at,
            labels: Labels::new(),
        }
    }

    /// Sets the assignee (builder pattern).
    pub fn with_assignee(mut self, assignee: Option<String>) -> Self {
        self.assignee = assignee;
        self
    }

    /// Sets the labels (builder pattern).
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Returns a copy with a new status, stamped as updated at `at`.
    ///
    /// `updated_at` is clamped so it never precedes `created_at`.
    pub fn with_status(&self, status: Status, at: DateTime<Utc>) -> Self {
        Issue {
            status,
            updated_at: at.max(self.created_at),
            ..self.clone()
        }
    }

    /// Check record-level invariants on data that came from outside.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::CorruptedData("issue with empty id".to_string()));
        }
        if self.updated_at < self.created_at {
            return Err(Error::CorruptedData(format!(
                "issue {}: updatedAt precedes createdAt",
                self.id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
