// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! One invocation's view session: configuration plus the issue board.
//!
//! Nothing is written back; changes made during a command live only as long
//! as the process.

use std::fs;
use std::path::{Path, PathBuf};

use ot_core::{parse_issues, sample_issues, IssueBoard};

use crate::config::Config;
use crate::error::{Error, Result};

/// Where the issue collection was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Sample,
    File(PathBuf),
}

pub struct Session {
    pub config: Config,
    pub source: DataSource,
    pub board: IssueBoard,
}

impl Session {
    /// Open a session rooted at `dir`, optionally overriding the data file.
    pub fn open(dir: &Path, data_override: Option<&Path>) -> Result<Self> {
        let config = Config::load(dir)?;
        let (source, issues) = match config.data_path(dir, data_override) {
            Some(path) => {
                let issues = load_file(&path)?;
                (DataSource::File(path), issues)
            }
            None => (DataSource::Sample, sample_issues()?),
        };

        tracing::info!(source = ?source, count = issues.len(), "session opened");
        Ok(Session {
            config,
            source,
            board: IssueBoard::new(issues),
        })
    }
}

fn load_file(path: &Path) -> Result<Vec<ot_core::Issue>> {
    if !path.exists() {
        return Err(Error::DataFileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    parse_issues(&content).map_err(|e| match e {
        ot_core::Error::Json(json) => Error::CorruptedData {
            source_name: path.display().to_string(),
            reason: json.to_string(),
        },
        ot_core::Error::CorruptedData(reason) => Error::CorruptedData {
            source_name: path.display().to_string(),
            reason,
        },
        other => other.into(),
    })
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
