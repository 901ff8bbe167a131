// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! otrs - the library behind the `opentrack` CLI.
//!
//! Commands load an issue collection (a JSON file or the bundled sample
//! data) into an [`ot_core::IssueBoard`], apply filters or edits for the
//! lifetime of one invocation, and print the result. Nothing is persisted.
//!
//! # Main Components
//!
//! - [`Cli`] - clap argument definitions
//! - [`Config`] - optional `opentrack.toml` settings
//! - [`Session`] - configuration plus the loaded issue board
//! - [`Error`] - Error types for all operations

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
mod schema;

pub mod config;
pub mod error;
pub mod id;
pub mod logging;
pub mod session;

pub use cli::{Cli, Command, FilterArgs, OutputFormat, ReportFormat, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};
pub use session::{DataSource, Session};

use clap::CommandFactory;
use clap_complete::generate;

use commands::new::NewArgs;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        directory,
        data,
        command,
        ..
    } = cli;

    // Completion and schema output never touch issue data.
    let open = || commands::open_context(directory.as_deref(), data.as_deref());

    match command {
        Command::List { filter, output } => {
            commands::list::run(&mut open()?, filter.to_filter_state(), output)
        }
        Command::Stats { output } => commands::stats::run(&open()?, output),
        Command::Show { id, output } => commands::show::run(&open()?, &id, output),
        Command::New {
            title,
            description,
            issue_type,
            priority,
            assignee,
            label,
            output,
        } => commands::new::run(
            &mut open()?,
            NewArgs {
                title,
                description,
                issue_type,
                priority,
                assignee,
                labels: label,
                output,
            },
        ),
        Command::Status { id, status } => commands::status::run(&mut open()?, &id, &status),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "opentrack", &mut std::io::stdout());
            Ok(())
        }
        Command::Schema(cmd) => commands::schema::run(cmd),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
