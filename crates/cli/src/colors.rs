// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Terminal color utilities for help text and issue badges.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use ot_core::{Priority, Status};

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders, hints, closed issues: medium grey
    pub const CONTEXT: u8 = 245;
    /// Open issues, high priority: orange
    pub const WARN: u8 = 214;
    /// In-progress issues, medium priority: blue
    pub const ACTIVE: u8 = 75;
    /// Resolved issues: green
    pub const DONE: u8 = 114;
    /// Critical priority: red
    pub const ALERT: u8 = 203;

    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Wrap `text` in a 256-color foreground escape.
pub fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{}", codes::RESET)
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

pub fn status_code(status: Status) -> u8 {
    match status {
        Status::Open => codes::WARN,
        Status::InProgress => codes::ACTIVE,
        Status::Resolved => codes::DONE,
        Status::Closed => codes::CONTEXT,
    }
}

pub fn priority_code(priority: Priority) -> u8 {
    match priority {
        Priority::Low => codes::CONTEXT,
        Priority::Medium => codes::ACTIVE,
        Priority::High => codes::WARN,
        Priority::Critical => codes::ALERT,
    }
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. In example lines the command (everything
/// before the first run of two spaces) is a literal, with quoted arguments
/// and `<placeholders>` dimmed.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];

            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match find_description_start(trimmed) {
                Some(end) => format!(
                    "{indent}{}{}",
                    colorize_command(&trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize one example command word by word.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut rest = cmd;

    while !rest.is_empty() {
        let (segment, tail) = if let Some(quoted) = rest.strip_prefix('"') {
            let end = quoted.find('"').map_or(rest.len(), |i| i + 2);
            rest.split_at(end)
        } else if rest.starts_with('<') {
            let end = rest.find('>').map_or(rest.len(), |i| i + 1);
            rest.split_at(end)
        } else {
            let end = rest.find([' ', '"', '<']).unwrap_or(rest.len()).max(1);
            rest.split_at(end)
        };

        if segment == " " {
            result.push(' ');
        } else if segment.starts_with('"') || segment.starts_with('<') {
            result.push_str(&context(segment));
        } else {
            result.push_str(&literal(segment));
        }
        rest = tail;
    }

    result
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    let after = line[start..].trim_start();
    if after.is_empty() {
        None
    } else {
        Some(start)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
