// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Generate a UUID-shaped issue ID from title, timestamp and a nonce.
/// Format: 8-4-4-4-12 lowercase hex taken from SHA256(title + timestamp + nonce)
pub fn generate_id(title: &str, created_at: &DateTime<Utc>, nonce: u32) -> String {
    let input = format!("{}{}{}", title, created_at.to_rfc3339(), nonce);
    let hash = Sha256::digest(input.as_bytes());
    let hex = hex::encode(&hash[..16]);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

/// Generate an ID for which `taken` is false, bumping the nonce on collision.
pub fn generate_unique_id<F>(title: &str, created_at: &DateTime<Utc>, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut nonce = 0;
    loop {
        let id = generate_id(title, created_at, nonce);
        if !taken(&id) {
            return id;
        }
        tracing::debug!(id = %id, nonce, "id collision, retrying");
        nonce += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
