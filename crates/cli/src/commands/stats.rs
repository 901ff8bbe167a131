// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

use crate::cli::ReportFormat;
use crate::error::Result;

use super::Context;

pub fn run(ctx: &Context, output: ReportFormat) -> Result<()> {
    println!("{}", render(ctx, output)?);
    Ok(())
}

/// Summary counts over the whole collection; filters never apply.
pub(crate) fn render(ctx: &Context, output: ReportFormat) -> Result<String> {
    let counts = ctx.session.board.summary_counts();
    Ok(match output {
        ReportFormat::Text => ctx.renderer().stats(&counts),
        ReportFormat::Json => serde_json::to_string_pretty(&counts)?,
    })
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
