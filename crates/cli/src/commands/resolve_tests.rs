// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Utc;
use deflect_core::{seed, TicketStatus};

fn test_config() -> Config {
    Config {
        prefix: "test".to_string(),
        threshold: 0.3,
    }
}

fn seeded_db() -> Database {
    let db = Database::open_in_memory().unwrap();
    seed::seed_articles(&db).unwrap();
    db
}

fn stored_ticket(db: &Database, id: &str, title: &str) -> Ticket {
    let ticket = Ticket::new(
        id.to_string(),
        title.to_string(),
        String::new(),
        "web".to_string(),
        Utc::now(),
    );
    db.create_ticket(&ticket).unwrap();
    ticket
}

#[test]
fn resolves_pending_ticket_and_persists() {
    let db = seeded_db();
    stored_ticket(&db, "test-1", "forgot password");

    let (ticket, candidates) = run_impl(&db, &test_config(), "test-1").unwrap();

    assert_eq!(ticket.status, TicketStatus::AutoResolved);
    assert!(ticket.resolution.is_some());
    assert!(!candidates.is_empty());
    assert_eq!(candidates[0].0.title, "Password Reset Guide");

    let stored = db.get_ticket("test-1").unwrap();
    assert_eq!(stored.status, TicketStatus::AutoResolved);
    assert_eq!(stored.resolution, ticket.resolution);
}

#[test]
fn candidates_are_capped_at_three() {
    let db = seeded_db();
    // Shares vocabulary with many seed articles
    stored_ticket(&db, "test-1", "email account settings password feature roadmap");

    let (_, candidates) = run_impl(&db, &test_config(), "test-1").unwrap();

    assert!(candidates.len() <= 3);
    // Highest score first
    assert!(candidates.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn unmatched_ticket_escalates() {
    let db = seeded_db();
    stored_ticket(&db, "test-1", "zxqvbnm asdfgh");

    let (ticket, candidates) = run_impl(&db, &test_config(), "test-1").unwrap();

    assert_eq!(ticket.status, TicketStatus::Escalated);
    assert!(ticket.resolution.is_none());
    assert!(candidates.is_empty());
}

#[test]
fn terminal_ticket_is_refused() {
    let db = seeded_db();
    let mut ticket = stored_ticket(&db, "test-1", "forgot password");
    ticket.status = TicketStatus::AutoResolved;
    ticket.resolution = Some("done".to_string());
    db.update_ticket(&ticket).unwrap();

    let err = run_impl(&db, &test_config(), "test-1").unwrap_err();
    assert!(matches!(err, Error::AlreadyTerminal { .. }));
}

#[test]
fn missing_ticket_errors() {
    let db = seeded_db();

    let err = run_impl(&db, &test_config(), "test-nope").unwrap_err();
    assert!(matches!(
        err,
        Error::Core(deflect_core::Error::TicketNotFound(_))
    ));
}
