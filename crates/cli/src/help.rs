// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));

    Styles::styled()
        .header(fg(colors::codes::HEADER))
        .usage(fg(colors::codes::HEADER))
        .literal(fg(colors::codes::LITERAL))
        .placeholder(fg(colors::codes::CONTEXT))
        .valid(fg(colors::codes::CONTEXT))
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    let options = if colors::should_colorize() {
        colors::header("Options:")
    } else {
        "Options:".to_string()
    };
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        options
    )
}

const COMMAND_WIDTH: usize = 12;

const ISSUE_COMMANDS: &[(&str, &str)] = &[
    ("list", "List issues matching filters"),
    ("stats", "Show summary counts"),
    ("show", "Show issue details"),
    ("new", "Create a new issue"),
    ("status", "Change an issue's status"),
];

const SETUP_COMMANDS: &[(&str, &str)] = &[
    ("schema", "Output JSON Schema for commands"),
    ("completion", "Generate shell completions"),
];

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let color = colors::should_colorize();
    let header = |text: &str| {
        if color {
            colors::header(text)
        } else {
            text.to_string()
        }
    };
    format!(
        "{}\n{}\n\n{}\n{}\n",
        header("Issues:"),
        command_lines(ISSUE_COMMANDS, color),
        header("Setup:"),
        command_lines(SETUP_COMMANDS, color),
    )
}

fn command_lines(commands: &[(&str, &str)], color: bool) -> String {
    commands
        .iter()
        .map(|(name, about)| {
            let pad = COMMAND_WIDTH.saturating_sub(name.len());
            let name = if color {
                colors::literal(name)
            } else {
                name.to_string()
            };
            format!("  {name}{:pad$}{about}", "")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  opentrack list                  List all issues
  opentrack list -s open          Only open issues
  opentrack show <id>             Inspect an issue
  OPENTRACK_LOG=debug opentrack   Show diagnostic logs",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
