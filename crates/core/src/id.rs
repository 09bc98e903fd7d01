// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Short content-hash identifiers for tickets and knowledge articles.
//!
//! IDs look like `tkt-3fa91c20` or `kb-0b7de411`: a prefix, a dash, and the
//! first 8 hex chars of SHA-256 over the title and creation timestamp.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Hash bytes kept in an ID (8 hex chars).
const ID_HASH_BYTES: usize = 4;

/// Derive the base ID for an entity from its title and creation time.
pub fn generate_id(prefix: &str, title: &str, created_at: &DateTime<Utc>) -> String {
    let digest = Sha256::new()
        .chain_update(title.as_bytes())
        .chain_update(created_at.to_rfc3339().as_bytes())
        .finalize();
    format!("{}-{}", prefix, hex::encode(&digest[..ID_HASH_BYTES]))
}

/// Derive an ID that does not collide with an existing one.
///
/// `exists` is consulted for the base ID first; on a hit, numeric suffixes
/// (`-2`, `-3`, ...) are tried until a free ID is found.
pub fn generate_unique_id<F>(
    prefix: &str,
    title: &str,
    created_at: &DateTime<Utc>,
    exists: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    let base = generate_id(prefix, title, created_at);
    if !exists(&base) {
        return base;
    }

    let mut suffix = 2u32;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !exists(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Validate an ID prefix: 2+ chars, lowercase alphanumeric, at least one letter.
///
/// An all-digit prefix is rejected; IDs starting with digits read like bare
/// numbers in command output.
pub fn validate_prefix(prefix: &str) -> bool {
    prefix.len() >= 2
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && prefix.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
