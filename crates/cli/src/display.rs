// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-line text formatting for tickets, articles, and activity entries.

use deflect_core::{ActivityLog, KnowledgeArticle, Ticket};

/// Format a ticket as a single list line.
///
/// `[bug/high] tkt-a1b2c3d4 escalated     Crash on save`
pub fn format_ticket_line(ticket: &Ticket) -> String {
    let classification = match ticket.classification {
        Some(c) => format!("{}/{}", c.category, c.severity),
        None => "unclassified".to_string(),
    };
    format!(
        "[{}] {} {:<13} {}",
        classification, ticket.id, ticket.status, ticket.title
    )
}

/// Format a knowledge article as a single list line.
///
/// `[account_issue] kb-a1b2c3d4 Password Reset Guide (password, reset)`
pub fn format_article_line(article: &KnowledgeArticle) -> String {
    format!(
        "[{}] {} {} ({})",
        article.category,
        article.id,
        article.title,
        article.tags.join(", ")
    )
}

/// Format an activity entry as a single trail line.
///
/// `2026-08-05 12:00:03  Ticket Created - Source: web`
pub fn format_activity_line(entry: &ActivityLog) -> String {
    let timestamp = entry.created_at.format("%Y-%m-%d %H:%M:%S");
    if entry.details.is_empty() {
        format!("{}  {}", timestamp, entry.action)
    } else {
        format!("{}  {} - {}", timestamp, entry.action, entry.details)
    }
}

/// Format a matching score for display, two decimals as logged.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
