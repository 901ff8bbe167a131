// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Display lookup tables for status, priority and type badges.

use crate::issue::{IssueType, Priority, Status};

/// How a category value is presented: human label and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub icon: &'static str,
}

impl Badge {
    const fn new(label: &'static str, icon: &'static str) -> Self {
        Badge { label, icon }
    }
}

impl Status {
    pub fn badge(&self) -> Badge {
        match self {
            Status::Open => Badge::new("Open", "⚠️"),
            Status::InProgress => Badge::new("In Progress", "🔄"),
            Status::Resolved => Badge::new("Resolved", "✅"),
            Status::Closed => Badge::new("Closed", "⚫"),
        }
    }
}

impl Priority {
    pub fn badge(&self) -> Badge {
        match self {
            Priority::Low => Badge::new("Low", "🔽"),
            Priority::Medium => Badge::new("Medium", "➡️"),
            Priority::High => Badge::new("High", "🔼"),
            Priority::Critical => Badge::new("Critical", "🚨"),
        }
    }
}

impl IssueType {
    pub fn badge(&self) -> Badge {
        match self {
            IssueType::Bug => Badge::new("Bug", "🐛"),
            IssueType::Feature => Badge::new("Feature", "💡"),
            IssueType::Enhancement => Badge::new("Enhancement", "⚡"),
            IssueType::Task => Badge::new("Task", "✅"),
        }
    }
}

#[cfg(test)]
#[path = "badge_tests.rs"]
mod tests;
