// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

use ot_core::FilterState;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::schema::ListOutputJson;

use super::Context;

pub fn run(ctx: &mut Context, filter: FilterState, output: OutputFormat) -> Result<()> {
    println!("{}", render(ctx, filter, output)?);
    Ok(())
}

/// Apply the filters to the session board and render the visible issues.
pub(crate) fn render(ctx: &mut Context, filter: FilterState, output: OutputFormat) -> Result<String> {
    ctx.session.board.set_filter(filter);
    let board = &ctx.session.board;

    let out = match output {
        OutputFormat::Text => ctx.renderer().issue_list(board),
        OutputFormat::Json => serde_json::to_string_pretty(&ListOutputJson::from_board(board))?,
        OutputFormat::Id => board
            .visible()
            .iter()
            .map(|issue| issue.id.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(out)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
