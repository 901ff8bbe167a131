// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

use chrono::{DateTime, Utc};
use ot_core::{
    absolute_date, absolute_date_time, activity_timeline, relative_time, short_id, Issue,
    IssueBoard, Priority, StatusChange, SummaryCounts,
};

use crate::colors;

/// Maximum line width for wrapped text content (excluding the card indent).
const WRAP_WIDTH: usize = 72;

/// Lines of description shown on a list card.
const CARD_DESCRIPTION_LINES: usize = 2;

const INDENT: &str = "    ";

/// Wrap text at word boundaries, keeping existing line breaks.
///
/// Widths are counted in characters. Words longer than `width` get a line of
/// their own rather than being split.
pub fn wrap_text(content: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in content.lines() {
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current.is_empty() {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }
        lines.push(current);
    }

    lines
}

/// Wrap and keep at most `max_lines`, marking truncation with an ellipsis.
pub fn clamp_lines(content: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(content, width);
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

/// Renders view models as terminal text.
///
/// Holds the reference time for relative dates and whether to emit color.
pub struct Renderer {
    now: DateTime<Utc>,
    color: bool,
}

impl Renderer {
    pub fn new(now: DateTime<Utc>, color: bool) -> Self {
        Renderer { now, color }
    }

    /// Renderer without color escapes.
    pub fn plain(now: DateTime<Utc>) -> Self {
        Renderer::new(now, false)
    }

    fn paint(&self, code: u8, text: &str) -> String {
        if self.color {
            colors::paint(code, text)
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        self.paint(colors::codes::CONTEXT, text)
    }

    fn status_badge(&self, issue: &Issue) -> String {
        let badge = issue.status.badge();
        let text = format!("[{} {}]", badge.icon, badge.label);
        self.paint(colors::status_code(issue.status), &text)
    }

    fn priority_badge(&self, priority: Priority) -> String {
        let badge = priority.badge();
        let text = format!("[{} {}]", badge.icon, badge.label);
        self.paint(colors::priority_code(priority), &text)
    }

    /// One issue as it appears in the list.
    ///
    /// ```text
    /// 🐛 Login page not responsive on mobile
    ///     The login form overflows on screens smaller than 375px…
    ///     [⚠️ Open] [🔼 High] mobile, ui
    ///     #1a2b3c4d · 2 days ago · @jane.smith
    /// ```
    pub fn issue_card(&self, issue: &Issue) -> Vec<String> {
        let mut lines = vec![format!("{} {}", issue.issue_type.badge().icon, issue.title)];

        for line in clamp_lines(&issue.description, WRAP_WIDTH, CARD_DESCRIPTION_LINES) {
            lines.push(format!("{INDENT}{}", self.dim(&line)));
        }

        let mut badges = format!(
            "{INDENT}{} {}",
            self.status_badge(issue),
            self.priority_badge(issue.priority)
        );
        if !issue.labels.is_empty() {
            badges.push(' ');
            badges.push_str(&issue.labels.as_slice().join(", "));
        }
        lines.push(badges);

        let mut meta = format!(
            "#{} · {}",
            short_id(&issue.id),
            relative_time(issue.created_at, self.now)
        );
        if let Some(assignee) = &issue.assignee {
            meta.push_str(&format!(" · @{}", assignee));
        }
        lines.push(format!("{INDENT}{}", self.dim(&meta)));

        lines
    }

    /// Active filter chips, or `None` when every filter is at its default.
    pub fn filter_chips(&self, chips: &[String]) -> Option<String> {
        if chips.is_empty() {
            return None;
        }
        Some(format!("{} {}", self.dim("Filters:"), chips.join(" | ")))
    }

    /// The dashboard list: filter chips, cards, and the visible count.
    pub fn issue_list(&self, board: &IssueBoard) -> String {
        let mut out = Vec::new();

        if let Some(chips) = self.filter_chips(&board.active_filters()) {
            out.push(chips);
            out.push(String::new());
        }

        let visible = board.visible();
        if visible.is_empty() {
            out.push("No issues found".to_string());
            out.push(self.dim("Try adjusting your search or filters."));
            return out.join("\n");
        }

        for issue in &visible {
            out.extend(self.issue_card(issue));
            out.push(String::new());
        }
        out.push(format!(
            "Showing {} of {} issues",
            visible.len(),
            board.issues().len()
        ));

        out.join("\n")
    }

    /// The four stat cards.
    pub fn stats(&self, counts: &SummaryCounts) -> String {
        [
            ("Total Issues", counts.total),
            ("Open", counts.open),
            ("In Progress", counts.in_progress),
            ("Resolved", counts.resolved),
        ]
        .iter()
        .map(|(label, count)| format!("{:<14}{}", label, count))
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Full detail page for one issue.
    pub fn issue_details(&self, issue: &Issue) -> String {
        let type_badge = issue.issue_type.badge();
        let mut out = vec![
            format!("[{} {}] {}", type_badge.icon, type_badge.label, issue.title),
            self.dim(&format!(
                "#{} • Created {}",
                short_id(&issue.id),
                relative_time(issue.created_at, self.now)
            )),
            String::new(),
            format!("{:<10}{}", "ID:", issue.id),
            format!("{:<10}{}", "Status:", self.status_badge(issue)),
            format!("{:<10}{}", "Priority:", self.priority_badge(issue.priority)),
            format!("{:<10}@{}", "Reporter:", issue.reporter),
        ];
        if let Some(assignee) = &issue.assignee {
            out.push(format!("{:<10}@{}", "Assignee:", assignee));
        }
        out.push(format!("{:<10}{}", "Created:", absolute_date(issue.created_at)));
        out.push(format!("{:<10}{}", "Updated:", absolute_date(issue.updated_at)));
        if !issue.labels.is_empty() {
            out.push(format!("{:<10}{}", "Labels:", issue.labels.as_slice().join(", ")));
        }

        out.push(String::new());
        out.push("Description:".to_string());
        for line in wrap_text(&issue.description, WRAP_WIDTH) {
            out.push(format!("{INDENT}{line}"));
        }

        out.push(String::new());
        out.push("Activity:".to_string());
        for activity in activity_timeline(issue) {
            out.push(format!(
                "  @{} {} {}",
                activity.user,
                activity.kind.description(),
                self.dim(&format!("· {}", absolute_date_time(activity.at)))
            ));
        }

        out.join("\n")
    }

    /// Confirmation after a status update.
    pub fn status_change(&self, change: &StatusChange) -> String {
        let from = change.from.badge();
        let to = change.to.badge();
        format!(
            "{}\n{}",
            change.message(),
            self.dim(&format!(
                "#{}: {} → {}",
                short_id(&change.id),
                from.label,
                to.label
            ))
        )
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
