// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

use ot_core::{short_id, Issue, IssueType, Labels, NewIssueForm, Priority};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::id::generate_unique_id;

use super::Context;

/// Raw `new` arguments as parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    pub title: String,
    pub description: Option<String>,
    pub issue_type: String,
    pub priority: String,
    pub assignee: Option<String>,
    /// Each entry may hold several comma-separated labels.
    pub labels: Vec<String>,
    pub output: OutputFormat,
}

pub fn run(ctx: &mut Context, args: NewArgs) -> Result<()> {
    println!("{}", render(ctx, args)?);
    Ok(())
}

/// Fill the add-issue form from the arguments.
pub(crate) fn build_form(args: &NewArgs) -> Result<NewIssueForm> {
    let issue_type: IssueType = args.issue_type.parse()?;
    let priority: Priority = args.priority.parse()?;

    let mut form = NewIssueForm {
        title: args.title.clone(),
        description: args.description.clone().unwrap_or_default(),
        issue_type,
        priority,
        assignee: args.assignee.clone().unwrap_or_default(),
        labels: Labels::new(),
    };
    for entry in &args.labels {
        for label in &Labels::from_csv(entry) {
            if !form.add_label(label) {
                tracing::warn!(label = %label, "duplicate label ignored");
            }
        }
    }

    Ok(form)
}

/// Validate the form, add the issue to the session board and render it.
pub(crate) fn render(ctx: &mut Context, args: NewArgs) -> Result<String> {
    let form = build_form(&args)?;
    form.validate()?;

    let issue = create(ctx, form)?;
    Ok(match args.output {
        OutputFormat::Text => {
            let mut lines = vec![format!("Created issue #{}", short_id(&issue.id))];
            lines.extend(ctx.renderer().issue_card(&issue));
            lines.join("\n")
        }
        OutputFormat::Json => serde_json::to_string_pretty(&issue)?,
        OutputFormat::Id => issue.id,
    })
}

fn create(ctx: &mut Context, form: NewIssueForm) -> Result<Issue> {
    let board = &ctx.session.board;
    // Short ids must stay unique too, or prefix lookups would turn ambiguous.
    let id = generate_unique_id(form.title.trim(), &ctx.now, |candidate| {
        board
            .issues()
            .iter()
            .any(|issue| short_id(&issue.id) == short_id(candidate))
    });

    let issue = form.into_issue(id, ctx.session.config.reporter.clone(), ctx.now)?;
    ctx.session.board.add(issue.clone())?;
    tracing::info!(id = %issue.id, "issue created");
    Ok(issue)
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
