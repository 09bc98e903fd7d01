// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use deflect_core::{seed, Database};

use crate::config::{get_db_path, init_work_dir};
use crate::error::Result;

pub fn run(path: Option<PathBuf>, prefix: String, threshold: f64, no_seed: bool) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from("."));
    let seeded = run_impl(&target, &prefix, threshold, no_seed)?;

    println!("Initialized triage store in {}", target.display());
    match seeded {
        0 => println!("Knowledge base left empty (every ticket will escalate)"),
        n => println!("Seeded {} knowledge articles", n),
    }
    Ok(())
}

/// Internal implementation that returns the seeded article count for testing.
pub(crate) fn run_impl(path: &Path, prefix: &str, threshold: f64, no_seed: bool) -> Result<usize> {
    let work_dir = init_work_dir(path, prefix, threshold)?;
    let db = Database::open(&get_db_path(&work_dir))?;

    if no_seed {
        return Ok(0);
    }
    Ok(seed::seed_articles(&db)?)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
