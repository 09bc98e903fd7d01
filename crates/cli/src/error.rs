// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the deflectrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'deflect init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("invalid prefix: must be 2+ lowercase alphanumeric with at least one letter")]
    InvalidPrefix,

    #[error("invalid threshold: {0}\n  hint: the threshold must be between 0.0 and 1.0")]
    InvalidThreshold(f64),

    #[error("ticket {id} is already {status}\n  hint: only new or classified tickets can be resolved")]
    AlreadyTerminal { id: String, status: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Core(#[from] deflect_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for deflectrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
