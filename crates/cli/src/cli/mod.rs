// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::FilterArgs;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    /// Bare issue ids, one per line
    Id,
}

/// Output format for reports that have no id-only form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "opentrack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "A small issue tracker dashboard for the terminal")]
#[command(
    long_about = "A small issue tracker dashboard for the terminal.\n\n\
    Browse, filter and inspect issues from a JSON file or the bundled sample data."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if opentrack was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// JSON file holding the issue collection (overrides opentrack.toml)
    #[arg(long, global = true, value_name = "file")]
    pub data: Option<PathBuf>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List issues matching the current filters
    #[command(after_help = colors::examples("\
Examples:
  opentrack list                       List every issue
  opentrack list -q login              Search titles and descriptions
  opentrack list -s open -p critical   Open critical issues
  opentrack list -t bug -o json        Bugs as JSON"))]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show summary counts across all issues
    Stats {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: ReportFormat,
    },

    /// Show issue details and activity
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  opentrack show 1a2b3c4d              Show by short id
  opentrack show 1a2b -o json          Unique prefixes work too")
    )]
    Show {
        /// Issue ID or unique ID prefix
        id: String,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Create a new issue
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  opentrack new \"Fix login\" -d \"Users see a 500\"           Create a bug
  opentrack new \"Dark mode\" -d \"...\" -t feature -p low     Create a feature
  opentrack new \"Task\" -d \"...\" -a jane -l ui -l api       Assign with labels
  opentrack new \"Task\" -d \"...\" -o id                      Output only ID")
    )]
    New {
        /// Issue title
        title: String,

        /// Issue description
        #[arg(long, short)]
        description: Option<String>,

        /// Issue type (bug, feature, enhancement, task)
        #[arg(long = "type", short = 't', default_value = "bug")]
        issue_type: String,

        /// Priority (low, medium, high, critical)
        #[arg(long, short, default_value = "medium")]
        priority: String,

        /// Assign the issue to someone
        #[arg(long, short)]
        assignee: Option<String>,

        /// Add label(s) to the issue (comma-separated or repeated)
        #[arg(long, short)]
        label: Vec<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Change an issue's status
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  opentrack status 1a2b3c4d in_progress   Start work on an issue
  opentrack status 1a2b resolved          Mark as resolved")
    )]
    Status {
        /// Issue ID or unique ID prefix
        id: String,

        /// New status (open, in_progress, resolved, closed)
        #[arg(value_parser = non_empty_string)]
        status: String,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Output JSON Schema for commands with JSON output
    ///
    /// Use these schemas to validate JSON output or generate type definitions.
    #[command(
        subcommand,
        after_help = colors::examples("\
Examples:
  opentrack schema list    Output schema for 'opentrack list -o json'
  opentrack schema show    Output schema for 'opentrack show <id> -o json'

Available schemas: list, show, stats")
    )]
    Schema(SchemaCommand),
}

/// Schema output commands.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum SchemaCommand {
    /// Output JSON Schema for 'opentrack list' JSON output
    List,
    /// Output JSON Schema for 'opentrack show' JSON output
    Show,
    /// Output JSON Schema for 'opentrack stats' JSON output
    Stats,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
