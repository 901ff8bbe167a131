// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

//! Project configuration management.
//!
//! Configuration is read from `opentrack.toml` in the working directory and
//! includes:
//! - `data`: Optional path to a JSON issue file (relative to the config file)
//! - `reporter`: Handle recorded as reporter on issues created with `new`
//!
//! A missing file means defaults: the bundled sample issues and an
//! `anonymous` reporter.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "opentrack.toml";
const DEFAULT_REPORTER: &str = "anonymous";

/// Project configuration stored in `opentrack.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// JSON file holding the issue collection. Falls back to sample data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,
    /// Reporter handle for new issues.
    #[serde(default = "default_reporter")]
    pub reporter: String,
}

fn default_reporter() -> String {
    DEFAULT_REPORTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: None,
            reporter: default_reporter(),
        }
    }
}

impl Config {
    /// Load configuration from `dir`, or defaults if no config file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            tracing::debug!(dir = %dir.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        if config.reporter.trim().is_empty() {
            return Err(Error::Config("reporter cannot be empty".to_string()));
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve the data file path.
    ///
    /// An explicit override wins over the config file. Relative paths from
    /// either source are resolved against `dir`.
    pub fn data_path(&self, dir: &Path, override_path: Option<&Path>) -> Option<PathBuf> {
        let path = override_path.or(self.data.as_deref())?;
        Some(if path.is_absolute() {
            path.to_path_buf()
        } else {
            dir.join(path)
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
