// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Date and identifier formatting for issue cards and detail views.
//!
//! All rendering happens in UTC so output does not depend on the host
//! timezone.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const MONTH: i64 = 2_592_000;
const YEAR: i64 = 31_536_000;

/// Length of the abbreviated id shown on cards.
pub const SHORT_ID_LEN: usize = 8;

/// Describe how long ago `date` was, relative to `now`.
///
/// Buckets are half-open and counts use integer division, so 60 seconds is
/// "1 minutes ago". Counts are never singularized. Dates in the future are
/// reported as "just now".
pub fn relative_time(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - date).num_seconds().max(0);

    if elapsed < MINUTE {
        "just now".to_string()
    } else if elapsed < HOUR {
        format!("{} minutes ago", elapsed / MINUTE)
    } else if elapsed < DAY {
        format!("{} hours ago", elapsed / HOUR)
    } else if elapsed < MONTH {
        format!("{} days ago", elapsed / DAY)
    } else if elapsed < YEAR {
        format!("{} months ago", elapsed / MONTH)
    } else {
        format!("{} years ago", elapsed / YEAR)
    }
}

/// Calendar date, e.g. `Jan 15, 2024`.
pub fn absolute_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Calendar date with 12-hour time, e.g. `Jan 15, 2024, 2:22 PM`.
pub fn absolute_date_time(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// The first [`SHORT_ID_LEN`] characters of an id.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
