// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for commands that support JSON output.

use ot_core::SummaryCounts;
use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{IssueDetailsJson, ListOutputJson};

pub fn run(cmd: SchemaCommand) -> Result<()> {
    println!("{}", render(cmd)?);
    Ok(())
}

pub(crate) fn render(cmd: SchemaCommand) -> Result<String> {
    let schema = match cmd {
        SchemaCommand::List => schema_for!(ListOutputJson),
        SchemaCommand::Show => schema_for!(IssueDetailsJson),
        SchemaCommand::Stats => schema_for!(SummaryCounts),
    };
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
