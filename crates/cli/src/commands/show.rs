// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::schema::IssueDetailsJson;

use super::Context;

pub fn run(ctx: &Context, id: &str, output: OutputFormat) -> Result<()> {
    println!("{}", render(ctx, id, output)?);
    Ok(())
}

pub(crate) fn render(ctx: &Context, id: &str, output: OutputFormat) -> Result<String> {
    let issue = ctx.session.board.resolve(id)?;
    Ok(match output {
        OutputFormat::Text => ctx.renderer().issue_details(issue),
        OutputFormat::Json => serde_json::to_string_pretty(&IssueDetailsJson::new(issue))?,
        OutputFormat::Id => issue.id.clone(),
    })
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
