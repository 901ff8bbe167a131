// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! ot-core: Shared library for the OpenTrack issue tracker
//!
//! This crate provides the issue model, the filter engine that derives the
//! visible issue list from a filter state, and the view models behind the
//! dashboard, detail and add-issue screens. It performs no I/O beyond
//! parsing JSON handed to it.

pub mod badge;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod filter;
pub mod form;
pub mod format;
pub mod issue;

pub use badge::Badge;
pub use dataset::{parse_issues, sample_issues};
pub use detail::{activity_timeline, Activity, ActivityKind, StatusChange};
pub use error::{Error, Result};
pub use filter::{
    clear_filters, describe_active_filters, recompute_visible, summary_counts, FilterState,
    IssueBoard, Selection, SummaryCounts,
};
pub use form::{FieldError, FormField, NewIssueForm, ValidationErrors};
pub use format::{absolute_date, absolute_date_time, relative_time, short_id};
pub use issue::{Category, Issue, IssueType, Labels, Priority, Status};
