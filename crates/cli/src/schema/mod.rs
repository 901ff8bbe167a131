// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Output types for JSON-producing commands.
//!
//! Each type is both what the command serializes and what `opentrack schema`
//! describes, so the published schema cannot drift from the real output.
//! Issue, activity and count shapes come from `ot-core` with its `schemars`
//! feature enabled.

pub mod list;
pub mod show;

pub use list::ListOutputJson;
pub use show::IssueDetailsJson;
