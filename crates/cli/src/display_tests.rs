// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Utc;
use deflect_core::{Category, Classification, Severity, TicketStatus};

fn ticket() -> Ticket {
    let mut t = Ticket::new(
        "tkt-a1b2c3d4".to_string(),
        "Crash on save".to_string(),
        "it dies".to_string(),
        "web".to_string(),
        Utc::now(),
    );
    t.classification = Some(Classification {
        category: Category::Bug,
        severity: Severity::High,
    });
    t.status = TicketStatus::Escalated;
    t
}

#[test]
fn ticket_line_shows_classification_id_status_title() {
    let line = format_ticket_line(&ticket());

    assert!(line.starts_with("[bug/high] tkt-a1b2c3d4"));
    assert!(line.contains("escalated"));
    assert!(line.ends_with("Crash on save"));
}

#[test]
fn unclassified_ticket_line_says_so() {
    let mut t = ticket();
    t.classification = None;
    t.status = TicketStatus::New;

    let line = format_ticket_line(&t);
    assert!(line.starts_with("[unclassified]"));
}

#[test]
fn article_line_shows_category_and_tags() {
    let article = KnowledgeArticle::new(
        "kb-a1b2c3d4".to_string(),
        "Password Reset Guide".to_string(),
        "Click the link.".to_string(),
        vec!["password".to_string(), "reset".to_string()],
        Category::AccountIssue,
        Utc::now(),
    );

    let line = format_article_line(&article);
    assert_eq!(
        line,
        "[account_issue] kb-a1b2c3d4 Password Reset Guide (password, reset)"
    );
}

#[test]
fn activity_line_with_details() {
    let entry = ActivityLog::new("tkt-a1b2c3d4", "Ticket Created").with_details("Source: web");

    let line = format_activity_line(&entry);
    assert!(line.ends_with("Ticket Created - Source: web"));
}

#[test]
fn activity_line_without_details() {
    let entry = ActivityLog::new("tkt-a1b2c3d4", "Ticket Escalated: no matching articles");

    let line = format_activity_line(&entry);
    assert!(line.ends_with("Ticket Escalated: no matching articles"));
    assert!(!line.contains(" - "));
}

#[test]
fn score_formats_two_decimals() {
    assert_eq!(format_score(1.0), "1.00");
    assert_eq!(format_score(1.0 / 3.0), "0.33");
    assert_eq!(format_score(0.0), "0.00");
}
