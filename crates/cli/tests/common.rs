// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn deflect() -> Command {
    cargo_bin_cmd!("deflect")
}

/// Helper to create an initialized temp directory with the seeded KB.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    deflect()
        .arg("init")
        .arg("--prefix")
        .arg("test")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create an initialized temp directory with an empty KB.
pub fn init_temp_no_seed() -> TempDir {
    let temp = TempDir::new().unwrap();
    deflect()
        .arg("init")
        .arg("--prefix")
        .arg("test")
        .arg("--no-seed")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Submit a ticket and return its ID.
pub fn submit_ticket(temp: &TempDir, title: &str, description: &str) -> String {
    let output = deflect()
        .arg("submit")
        .arg(title)
        .arg("-d")
        .arg(description)
        .arg("-o")
        .arg("id")
        .current_dir(temp.path())
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
