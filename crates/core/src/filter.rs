// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Issue filter engine.
//!
//! [`FilterState`] holds the search box and the three category dropdowns.
//! [`recompute_visible`] derives the visible subset from a collection and a
//! filter state; it is pure and never fails. [`IssueBoard`] wraps one
//! collection and one filter state for a single view and keeps the visible
//! set current as filters change.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::issue::{null_as_default, Category, Issue, IssueType, Priority, Status};

/// Raw dropdown value meaning "do not filter on this category".
pub const ALL: &str = "all";

/// The value of one category dropdown.
///
/// Values that are neither `all` nor a known category value are kept
/// verbatim as [`Selection::Unknown`]; they match no issue. A `null` value
/// deserializes as [`Selection::All`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Selection<T: Category> {
    All,
    Only(T),
    Unknown(String),
}

impl<T: Category> Selection<T> {
    /// Interpret a raw dropdown value. Matching is exact, like the UI's.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL {
            return Selection::All;
        }
        match T::from_raw(raw) {
            Some(value) => Selection::Only(value),
            None => Selection::Unknown(raw.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => *selected == value,
            Selection::Unknown(_) => false,
        }
    }

    /// The raw dropdown value.
    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Only(value) => value.as_str(),
            Selection::Unknown(raw) => raw,
        }
    }
}

impl<T: Category> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Category> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Only(value)
    }
}

impl<T: Category> From<String> for Selection<T> {
    fn from(raw: String) -> Self {
        Selection::parse(&raw)
    }
}

impl<T: Category> From<Option<String>> for Selection<T> {
    fn from(raw: Option<String>) -> Self {
        raw.map(|raw| Selection::parse(&raw)).unwrap_or_default()
    }
}

impl<T: Category> From<Selection<T>> for String {
    fn from(selection: Selection<T>) -> Self {
        selection.as_str().to_string()
    }
}

impl<T: Category> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current search and category filters for one view.
///
/// Missing and `null` fields deserialize to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    /// Case-insensitive substring matched against title and description.
    /// Used as typed; no trimming.
    #[serde(deserialize_with = "null_as_default")]
    pub search_query: String,
    pub status_filter: Selection<Status>,
    pub priority_filter: Selection<Priority>,
    pub type_filter: Selection<IssueType>,
}

impl FilterState {
    /// Returns true if no filter criteria are active.
    pub fn is_default(&self) -> bool {
        self.search_query.is_empty()
            && self.status_filter.is_all()
            && self.priority_filter.is_all()
            && self.type_filter.is_all()
    }

    /// Returns true if the issue satisfies all four criteria.
    pub fn matches(&self, issue: &Issue) -> bool {
        self.matches_search(issue)
            && self.status_filter.matches(issue.status)
            && self.priority_filter.matches(issue.priority)
            && self.type_filter.matches(issue.issue_type)
    }

    fn matches_search(&self, issue: &Issue) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let query = self.search_query.to_lowercase();
        issue.title.to_lowercase().contains(&query)
            || issue.description.to_lowercase().contains(&query)
    }
}

/// Dashboard stat card counts, always over the unfiltered collection.
///
/// Closed issues contribute to `total` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SummaryCounts {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

/// Derive the visible subset of `issues`, keeping input order.
pub fn recompute_visible<'a>(issues: &'a [Issue], filter: &FilterState) -> Vec<&'a Issue> {
    issues.iter().filter(|issue| filter.matches(issue)).collect()
}

/// Count issues by status for the stat cards.
pub fn summary_counts(issues: &[Issue]) -> SummaryCounts {
    let mut counts = SummaryCounts {
        total: issues.len(),
        ..SummaryCounts::default()
    };
    for issue in issues {
        match issue.status {
            Status::Open => counts.open += 1,
            Status::InProgress => counts.in_progress += 1,
            Status::Resolved => counts.resolved += 1,
            Status::Closed => {}
        }
    }
    counts
}

/// The state every filter control returns to when cleared.
pub fn clear_filters() -> FilterState {
    FilterState::default()
}

/// Human-readable chips for the active filters.
///
/// Order is fixed: search, status, priority, type. Inactive filters are
/// skipped.
pub fn describe_active_filters(filter: &FilterState) -> Vec<String> {
    let mut fragments = Vec::new();

    if !filter.search_query.is_empty() {
        fragments.push(format!("Search: \"{}\"", filter.search_query));
    }
    if !filter.status_filter.is_all() {
        fragments.push(format!(
            "Status: {}",
            filter.status_filter.as_str().replace('_', " ")
        ));
    }
    if !filter.priority_filter.is_all() {
        fragments.push(format!("Priority: {}", filter.priority_filter));
    }
    if !filter.type_filter.is_all() {
        fragments.push(format!("Type: {}", filter.type_filter));
    }

    fragments
}

/// One view's issue collection, filter state and derived visible set.
///
/// Every filter mutation recomputes the visible set from scratch.
#[derive(Debug, Clone, Default)]
pub struct IssueBoard {
    pub(crate) issues: Vec<Issue>,
    filter: FilterState,
    /// Indices into `issues`, in collection order.
    visible: Vec<usize>,
}

impl IssueBoard {
    /// Creates a board with default filters; every issue is visible.
    pub fn new(issues: Vec<Issue>) -> Self {
        let mut board = IssueBoard {
            issues,
            filter: FilterState::default(),
            visible: Vec::new(),
        };
        board.recompute();
        board
    }

    /// The full, unfiltered collection.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The issues matching the current filters, in collection order.
    pub fn visible(&self) -> Vec<&Issue> {
        self.visible.iter().map(|&i| &self.issues[i]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.filter.search_query = query.into();
        self.recompute();
    }

    pub fn set_status_filter(&mut self, selection: Selection<Status>) {
        self.filter.status_filter = selection;
        self.recompute();
    }

    pub fn set_priority_filter(&mut self, selection: Selection<Priority>) {
        self.filter.priority_filter = selection;
        self.recompute();
    }

    pub fn set_type_filter(&mut self, selection: Selection<IssueType>) {
        self.filter.type_filter = selection;
        self.recompute();
    }

    /// Replace every filter at once.
    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.set_filter(clear_filters());
    }

    pub fn summary_counts(&self) -> SummaryCounts {
        summary_counts(&self.issues)
    }

    pub fn active_filters(&self) -> Vec<String> {
        describe_active_filters(&self.filter)
    }

    /// Look up an issue by exact id.
    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|issue| issue.id == id)
    }

    pub(crate) fn recompute(&mut self) {
        let filter = &self.filter;
        self.visible = self
            .issues
            .iter()
            .enumerate()
            .filter(|(_, issue)| filter.matches(issue))
            .map(|(i, _)| i)
            .collect();
        tracing::debug!(
            total = self.issues.len(),
            visible = self.visible.len(),
            "recomputed visible issues"
        );
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
