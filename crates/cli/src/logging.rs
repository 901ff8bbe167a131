// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Diagnostic logging setup.
//!
//! Log lines go to stderr so command output on stdout stays clean for pipes.
//! Verbosity comes from `OPENTRACK_LOG` using `EnvFilter` directives.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "OPENTRACK_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from `OPENTRACK_LOG`, falling back to warnings only.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
