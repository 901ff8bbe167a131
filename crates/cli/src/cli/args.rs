// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Shared argument structs for CLI commands.

use clap::Args;
use ot_core::{FilterState, Selection};

/// The dashboard's search box and three dropdowns.
///
/// Dropdown values are matched exactly; anything that is not `all` or a known
/// value filters out every issue.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Search titles and descriptions (case-insensitive)
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Filter by status (all, open, in_progress, resolved, closed)
    #[arg(long, short = 's', default_value = "all")]
    pub status: String,

    /// Filter by priority (all, low, medium, high, critical)
    #[arg(long, short = 'p', default_value = "all")]
    pub priority: String,

    /// Filter by type (all, bug, feature, enhancement, task)
    #[arg(long = "type", short = 't', default_value = "all")]
    pub issue_type: String,
}

impl FilterArgs {
    pub fn to_filter_state(&self) -> FilterState {
        FilterState {
            search_query: self.query.clone(),
            status_filter: Selection::parse(&self.status),
            priority_filter: Selection::parse(&self.priority),
            type_filter: Selection::parse(&self.issue_type),
        }
    }
}
