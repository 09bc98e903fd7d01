// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword-rule classification of tickets.
//!
//! An ordered rule table is scanned top to bottom; the first rule whose
//! keywords appear in the ticket text wins. This is a deliberate
//! first-match policy, not best-match: a crash report that also asks
//! "how to" recover is still a bug.

use crate::ticket::{Category, Classification, Ticket, TicketStatus};

/// Ordered classification rules. Order is part of the contract.
const RULES: &[(&[&str], Category)] = &[
    (
        &["crash", "error", "broken", "bug", "exception"],
        Category::Bug,
    ),
    (
        &["how do i", "how to", "help with", "guide"],
        Category::HowTo,
    ),
    (
        &["add feature", "request", "wish", "would be nice"],
        Category::FeatureRequest,
    ),
    (
        &["login", "password", "account", "billing", "subscription"],
        Category::AccountIssue,
    ),
];

/// Pick the category for a piece of ticket text.
///
/// Keyword matching is case-insensitive substring containment. Falls back
/// to [`Category::Other`] when no rule matches.
pub fn categorize(text: &str) -> Category {
    let text = text.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Other)
}

/// Classify a ticket in place: assign category and severity together and
/// advance status to `Classified`. No I/O, no failure modes.
pub fn classify(ticket: &mut Ticket) -> Classification {
    let category = categorize(&ticket.text());
    let classification = Classification {
        category,
        severity: category.default_severity(),
    };
    ticket.classification = Some(classification);
    ticket.status = TicketStatus::Classified;
    classification
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
