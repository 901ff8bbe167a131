// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Error types for ot-core operations.
//!
//! The filter engine itself never fails; these cover parsing user-supplied
//! values, looking issues up, and the add-issue and status-update flows.

use thiserror::Error;

use crate::form::ValidationErrors;

/// All possible errors that can occur in ot-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("ambiguous issue ID '{prefix}' matches: {}", matches.join(", "))]
    AmbiguousId {
        prefix: String,
        matches: Vec<String>,
    },

    #[error("duplicate issue ID: {0}")]
    DuplicateId(String),

    #[error("issue {id} is already {status}\n  hint: choose a different status to update it")]
    StatusUnchanged { id: String, status: String },

    #[error(
        "invalid issue type: '{0}'\n  hint: valid types are: bug, feature, enhancement, task"
    )]
    InvalidIssueType(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high, critical")]
    InvalidPriority(String),

    #[error(
        "invalid status: '{0}'\n  hint: valid statuses are: open, in_progress, resolved, closed"
    )]
    InvalidStatus(String),

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for ot-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
