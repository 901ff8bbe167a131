// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! The add-issue form model.
//!
//! Each field is named and validated on its own. Validation never stops at
//! the first problem: every check runs and each failing field reports one
//! message.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::error::{Error, Result};
use crate::issue::{normalize_assignee, Issue, IssueType, Labels, Priority};

/// Form fields that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    Description,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Description => "description",
        }
    }
}

/// A single failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Every failed check from one validation pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: FormField, message: &'static str) {
        self.0.push(FieldError { field, message });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// State of the add-issue form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIssueForm {
    pub title: String,
    pub description: String,
    pub issue_type: IssueType,
    pub priority: Priority,
    /// Blank means unassigned.
    pub assignee: String,
    pub labels: Labels,
}

impl Default for NewIssueForm {
    fn default() -> Self {
        NewIssueForm {
            title: String::new(),
            description: String::new(),
            issue_type: IssueType::Bug,
            priority: Priority::Medium,
            assignee: String::new(),
            labels: Labels::new(),
        }
    }
}

impl NewIssueForm {
    /// Add a label chip. Blank and duplicate labels are ignored.
    pub fn add_label(&mut self, label: &str) -> bool {
        self.labels.insert(label)
    }

    pub fn remove_label(&mut self, label: &str) -> bool {
        self.labels.remove(label)
    }

    /// Run every check and collect the failures.
    pub fn errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.push(FormField::Title, "Please enter a title");
        }
        if self.description.trim().is_empty() {
            errors.push(FormField::Description, "Please enter a description");
        }

        errors
    }

    pub fn validate(&self) -> Result<()> {
        let errors = self.errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(errors))
        }
    }

    /// Validate and build the open issue this form describes.
    pub fn into_issue(self, id: String, reporter: String, now: DateTime<Utc>) -> Result<Issue> {
        self.validate()?;

        let assignee = normalize_assignee(&self.assignee);

        Ok(Issue::new(
            id,
            self.title.trim().to_string(),
            self.description.trim().to_string(),
            self.issue_type,
            self.priority,
            reporter,
            now,
        )
        .with_assignee(assignee)
        .with_labels(self.labels))
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
