// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for deflect-core operations.

use thiserror::Error;

/// All possible errors that can occur in deflect-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("ticket not found: {0}")]
    TicketNotFound(String),

    #[error("article not found: {0}")]
    ArticleNotFound(String),

    #[error("invalid status transition: cannot go from {from} to {to}\n  hint: from '{from}' you can go to: {valid_targets}")]
    InvalidTransition {
        from: String,
        to: String,
        valid_targets: String,
    },

    #[error("invalid category: '{0}'\n  hint: valid categories are: bug, how_to, feature_request, account_issue, other")]
    InvalidCategory(String),

    #[error("invalid severity: '{0}'\n  hint: valid severities are: low, medium, high")]
    InvalidSeverity(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: new, classified, auto_resolved, escalated")]
    InvalidStatus(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for deflect-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
