// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.deflect/config.toml` and includes:
//! - `prefix`: the prefix for ticket IDs (e.g. "tkt" -> "tkt-a1b2c3d4")
//! - `threshold`: minimum coverage score required to auto-resolve

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use deflect_core::id::validate_prefix;
use deflect_core::DEFAULT_THRESHOLD;

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".deflect";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "tickets.db";

/// The default ticket ID prefix.
pub const DEFAULT_PREFIX: &str = "tkt";

/// Project configuration stored in `.deflect/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prefix for ticket IDs (2+ lowercase alphanumeric with at least one letter).
    pub prefix: String,
    /// Minimum coverage score to auto-resolve instead of escalate.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Config {
    /// Creates a new config, validating prefix and threshold.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] or [`Error::InvalidThreshold`] when
    /// a value is out of range.
    pub fn new(prefix: String, threshold: f64) -> Result<Self> {
        if !validate_prefix(&prefix) {
            return Err(Error::InvalidPrefix);
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::InvalidThreshold(threshold));
        }
        Ok(Config { prefix, threshold })
    }

    /// Loads configuration from the given `.deflect/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.deflect/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .deflect directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path inside the work directory.
pub fn get_db_path(work_dir: &Path) -> PathBuf {
    work_dir.join(DB_FILE_NAME)
}

/// Initialize a new .deflect directory at the given path.
pub fn init_work_dir(path: &Path, prefix: &str, threshold: f64) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;

    let config = Config::new(prefix.to_string(), threshold)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
