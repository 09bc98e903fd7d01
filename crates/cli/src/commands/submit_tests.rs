// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use deflect_core::{seed, Category, TicketStatus};

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

#[test]
fn password_reset_submission_auto_resolves() {
    let mut db = seeded_db();

    let outcome = run_impl(
        &mut db,
        &test_config(),
        "I cannot reset my password".to_string(),
        "I forgot my password and the reset email is not working login account".to_string(),
        "web".to_string(),
    )
    .unwrap();

    assert_eq!(outcome.ticket.status, TicketStatus::AutoResolved);
    assert_eq!(outcome.classification.category, Category::AccountIssue);
    assert!(outcome.activity.len() >= 3);
    assert_eq!(outcome.activity[0].action, "Ticket Created");
}

#[test]
fn gibberish_submission_escalates() {
    let mut db = seeded_db();

    let outcome = run_impl(
        &mut db,
        &test_config(),
        "xyzzy qwerty zzzz".to_string(),
        "blargh foobar something nonsense".to_string(),
        "api".to_string(),
    )
    .unwrap();

    assert_eq!(outcome.ticket.status, TicketStatus::Escalated);
    assert!(outcome.ticket.resolution.is_none());
    assert!(outcome.activity.len() >= 3);
}

#[test]
fn ticket_id_uses_configured_prefix() {
    let mut db = seeded_db();

    let outcome = run_impl(
        &mut db,
        &test_config(),
        "Some generic issue".to_string(),
        String::new(),
        "cli".to_string(),
    )
    .unwrap();

    assert!(outcome.ticket.id.starts_with("test-"));
}

#[test]
fn configured_threshold_is_honored() {
    let mut db = seeded_db();
    let strict = Config {
        prefix: "test".to_string(),
        threshold: 1.0,
    };

    // Scores well below 1.0 against the seed KB, so a strict threshold escalates
    let outcome = run_impl(
        &mut db,
        &strict,
        "How do I reset my password please".to_string(),
        String::new(),
        "web".to_string(),
    )
    .unwrap();

    assert_eq!(outcome.ticket.status, TicketStatus::Escalated);
}

#[test]
fn submission_is_persisted() {
    let mut db = seeded_db();

    let outcome = run_impl(
        &mut db,
        &test_config(),
        "forgot password".to_string(),
        String::new(),
        "web".to_string(),
    )
    .unwrap();

    let stored = db.get_ticket(&outcome.ticket.id).unwrap();
    assert_eq!(stored.status, outcome.ticket.status);
    assert_eq!(
        db.list_activity(&outcome.ticket.id).unwrap().len(),
        outcome.activity.len()
    );
}
