// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The OpenTrack Authors

pub mod list;
pub mod new;
pub mod schema;
pub mod show;
pub mod stats;
pub mod status;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::colors;
use crate::display::Renderer;
use crate::error::Result;
use crate::session::Session;

/// Everything a command needs: the loaded session, the clock and color choice.
pub struct Context {
    pub session: Session,
    pub now: DateTime<Utc>,
    pub color: bool,
}

impl Context {
    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.now, self.color)
    }
}

/// Open the session for the current invocation.
///
/// `directory` is the `-C` override; the process working directory otherwise.
pub fn open_context(directory: Option<&Path>, data: Option<&Path>) -> Result<Context> {
    let dir = match directory {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    Ok(Context {
        session: Session::open(&dir, data)?,
        now: Utc::now(),
        color: colors::should_colorize(),
    })
}
