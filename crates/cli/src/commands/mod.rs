// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod kb;
pub mod list;
pub mod log;
pub mod metrics;
pub mod resolve;
pub mod show;
pub mod simulate;
pub mod submit;

use std::path::PathBuf;

use deflect_core::Database;

use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::Result;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db = Database::open(&get_db_path(&work_dir))?;
    Ok((db, config, work_dir))
}
