// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

use ot_core::Status;

use crate::error::Result;

use super::Context;

pub fn run(ctx: &mut Context, id: &str, status: &str) -> Result<()> {
    println!("{}", render(ctx, id, status)?);
    Ok(())
}

/// Apply a status change to the session board.
///
/// The status string is parsed before the issue is looked up so a typo is
/// reported as such even for unknown ids.
pub(crate) fn render(ctx: &mut Context, id: &str, status: &str) -> Result<String> {
    let status: Status = status.parse()?;
    let change = ctx.session.board.update_status(id, status, ctx.now)?;
    Ok(ctx.renderer().status_change(&change))
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
