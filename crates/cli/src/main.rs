// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use otrs::Cli;

fn main() {
    otrs::logging::init();
    let cli = Cli::parse();
    if let Err(e) = otrs::run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
