// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn new_entry_has_no_database_id_yet() {
    let entry = ActivityLog::new("tkt-aaaa0000", "Ticket Created");

    assert_eq!(entry.id, 0);
    assert_eq!(entry.ticket_id, "tkt-aaaa0000");
    assert_eq!(entry.action, "Ticket Created");
    assert!(entry.details.is_empty());
}

#[test]
fn with_details_sets_details() {
    let entry = ActivityLog::new("tkt-aaaa0000", "Ticket Created").with_details("Source: web");

    assert_eq!(entry.details, "Source: web");
}

#[test]
fn serializes_with_snake_case_fields() {
    let entry = ActivityLog::new("tkt-aaaa0000", "Ticket Created").with_details("Source: web");

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["ticket_id"], "tkt-aaaa0000");
    assert_eq!(json["action"], "Ticket Created");
    assert_eq!(json["details"], "Source: web");
}
