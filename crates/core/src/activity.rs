// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only activity trail for pipeline runs.
//!
//! Entries are produced exclusively by the pipeline orchestrator, one batch
//! per run, in stage order. Once written they are never mutated or reordered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single entry in a ticket's activity trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLog {
    /// Database-assigned identifier.
    pub id: i64,
    /// The ticket this entry belongs to.
    pub ticket_id: String,
    /// Human-readable stage label (e.g. "Ticket Created").
    pub action: String,
    /// Free-text detail for the stage.
    pub details: String,
    /// When the entry was recorded.
    pub created_at: DateTime<Utc>,
}

impl ActivityLog {
    /// Creates a new entry with the current timestamp and empty details.
    pub fn new(ticket_id: impl Into<String>, action: impl Into<String>) -> Self {
        ActivityLog {
            id: 0, // Will be set by database
            ticket_id: ticket_id.into(),
            action: action.into(),
            details: String::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the details for this entry (builder pattern).
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }
}

#[cfg(test)]
#[path = "activity_tests.rs"]
mod tests;
