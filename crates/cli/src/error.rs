// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

use thiserror::Error;

/// All possible errors that can occur in the otrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
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

    #[error("cannot create issue: {0}")]
    CannotCreateIssue(String),

    #[error("data file not found: {0}\n  hint: pass --data <file> or set `data` in opentrack.toml")]
    DataFileNotFound(String),

    #[error("corrupted data in {source_name}: {reason}")]
    CorruptedData { source_name: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for otrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<ot_core::Error> for Error {
    fn from(e: ot_core::Error) -> Self {
        match e {
            ot_core::Error::IssueNotFound(id) => Error::IssueNotFound(id),
            ot_core::Error::AmbiguousId { prefix, matches } => {
                Error::AmbiguousId { prefix, matches }
            }
            ot_core::Error::DuplicateId(id) => Error::DuplicateId(id),
            ot_core::Error::StatusUnchanged { id, status } => {
                Error::StatusUnchanged { id, status }
            }
            ot_core::Error::InvalidIssueType(s) => Error::InvalidIssueType(s),
            ot_core::Error::InvalidPriority(s) => Error::InvalidPriority(s),
            ot_core::Error::InvalidStatus(s) => Error::InvalidStatus(s),
            ot_core::Error::Validation(errors) => Error::CannotCreateIssue(errors.to_string()),
            ot_core::Error::Json(e) => Error::Json(e),
            ot_core::Error::CorruptedData(reason) => Error::CorruptedData {
                source_name: "issue data".to_string(),
                reason,
            },
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
