// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core ticket types for the deflect triage engine.
//!
//! This module contains the fundamental data types: Ticket, Category,
//! Severity, Classification, and TicketStatus.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of support tickets by the nature of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Something is broken or misbehaving.
    Bug,
    /// The requester needs usage guidance.
    HowTo,
    /// A wish for new functionality.
    FeatureRequest,
    /// Login, password, billing, or subscription trouble.
    AccountIssue,
    /// Anything no classification rule matched.
    Other,
}

impl Category {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bug => "bug",
            Category::HowTo => "how_to",
            Category::FeatureRequest => "feature_request",
            Category::AccountIssue => "account_issue",
            Category::Other => "other",
        }
    }

    /// The severity assigned to tickets of this category.
    ///
    /// The mapping is fixed: bugs are urgent, usage questions are not,
    /// everything else sits in the middle.
    pub fn default_severity(&self) -> Severity {
        match self {
            Category::Bug => Severity::High,
            Category::HowTo => Severity::Low,
            Category::FeatureRequest => Severity::Medium,
            Category::AccountIssue => Severity::Medium,
            Category::Other => Severity::Medium,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bug" => Ok(Category::Bug),
            "how_to" | "howto" => Ok(Category::HowTo),
            "feature_request" | "feature-request" => Ok(Category::FeatureRequest),
            "account_issue" | "account-issue" => Ok(Category::AccountIssue),
            "other" => Ok(Category::Other),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// Urgency of a ticket, derived from its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(Error::InvalidSeverity(s.to_string())),
        }
    }
}

/// Category and severity assigned together by the classifier.
///
/// A ticket carries `Option<Classification>` rather than two independent
/// options, so the pair can never be half-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub severity: Severity,
}

/// Pipeline state of a ticket.
///
/// Status only ever advances: New -> Classified -> {AutoResolved, Escalated}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Just created, not yet classified.
    New,
    /// Category and severity assigned.
    Classified,
    /// Deflected against a knowledge article; resolution is set.
    AutoResolved,
    /// Handed to a human; no article cleared the threshold.
    Escalated,
}

impl TicketStatus {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::New => "new",
            TicketStatus::Classified => "classified",
            TicketStatus::AutoResolved => "auto_resolved",
            TicketStatus::Escalated => "escalated",
        }
    }

    /// Check if a transition from this status to target is a forward step
    /// of the pipeline. The pipeline never moves a ticket backwards.
    pub fn can_advance_to(&self, target: TicketStatus) -> bool {
        matches!(
            (*self, target),
            (TicketStatus::New, TicketStatus::Classified)
                | (TicketStatus::Classified, TicketStatus::AutoResolved)
                | (TicketStatus::Classified, TicketStatus::Escalated)
        )
    }

    /// Get valid transition targets as a formatted string.
    pub fn valid_targets(&self) -> String {
        match self {
            TicketStatus::New => "classified".to_string(),
            TicketStatus::Classified => "auto_resolved, escalated".to_string(),
            TicketStatus::AutoResolved | TicketStatus::Escalated => "none (terminal)".to_string(),
        }
    }

    /// Returns true if this is a terminal state (auto_resolved or escalated).
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::AutoResolved | TicketStatus::Escalated)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "new" => Ok(TicketStatus::New),
            "classified" => Ok(TicketStatus::Classified),
            "auto_resolved" | "auto-resolved" => Ok(TicketStatus::AutoResolved),
            "escalated" => Ok(TicketStatus::Escalated),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// The primary entity representing a support request moving through triage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier (format: `{prefix}-{hash}`).
    pub id: String,
    /// Short description of the request.
    pub title: String,
    /// Longer free-text body.
    pub description: String,
    /// Free-form origin tag (e.g. "web", "email", "api").
    pub source: String,
    /// Set by the classifier; `None` only while status is `New`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    /// Current pipeline state.
    pub status: TicketStatus,
    /// Deflection text; non-empty exactly when status is `AutoResolved`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    /// When the ticket was created.
    pub created_at: DateTime<Utc>,
    /// When the ticket was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Creates a new unclassified ticket in state `New`.
    pub fn new(
        id: String,
        title: String,
        description: String,
        source: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Ticket {
            id,
            title,
            description,
            source,
            classification: None,
            status: TicketStatus::New,
            resolution: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// The text the classifier and matcher operate on: title plus description.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
