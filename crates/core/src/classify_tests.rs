// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::ticket::Severity;
use chrono::Utc;
use yare::parameterized;

fn ticket(title: &str, description: &str) -> Ticket {
    Ticket::new(
        "tkt-aaaa0000".to_string(),
        title.to_string(),
        description.to_string(),
        "web".to_string(),
        Utc::now(),
    )
}

#[parameterized(
    crash = { "App crash on startup", Category::Bug },
    error = { "Getting an error 500", Category::Bug },
    broken = { "Export is broken", Category::Bug },
    exception = { "Unhandled exception in logs", Category::Bug },
    how_do_i = { "How do I export data", Category::HowTo },
    how_to = { "How to invite teammates", Category::HowTo },
    help_with = { "Need help with notifications", Category::HowTo },
    guide = { "Is there a setup guide", Category::HowTo },
    add_feature = { "Please add feature for teams", Category::FeatureRequest },
    request = { "Request: PDF export", Category::FeatureRequest },
    would_be_nice = { "Dark mode would be nice", Category::FeatureRequest },
    login = { "Cannot login anymore", Category::AccountIssue },
    password = { "My password stopped working", Category::AccountIssue },
    billing = { "Question about billing", Category::AccountIssue },
    no_match = { "The sidebar font feels small", Category::Other },
)]
fn categorize_by_keyword(title: &str, expected: Category) {
    assert_eq!(categorize(title), expected);
}

#[test]
fn categorize_is_case_insensitive() {
    assert_eq!(categorize("CRASH ON BOOT"), Category::Bug);
    assert_eq!(categorize("How To Reset"), Category::HowTo);
}

#[test]
fn categorize_first_match_wins() {
    // "how to" and "crash" both appear; the bug rule is scanned first
    assert_eq!(categorize("how to recover from a crash"), Category::Bug);
    // "login" and "request" both appear; feature_request is scanned first
    assert_eq!(
        categorize("request a new login screen"),
        Category::FeatureRequest
    );
}

#[test]
fn categorize_matches_description_too() {
    let t = ticket("Something odd", "the page shows an exception trace");
    assert_eq!(categorize(&t.text()), Category::Bug);
}

#[test]
fn classify_sets_pair_and_advances_status() {
    let mut t = ticket("App crash on startup", "it dies immediately");

    let classification = classify(&mut t);

    assert_eq!(classification.category, Category::Bug);
    assert_eq!(classification.severity, Severity::High);
    assert_eq!(t.classification, Some(classification));
    assert_eq!(t.status, TicketStatus::Classified);
    assert!(t.resolution.is_none());
}

#[test]
fn classify_unmatched_defaults_to_other_medium() {
    let mut t = ticket("Something", "");

    let classification = classify(&mut t);

    assert_eq!(classification.category, Category::Other);
    assert_eq!(classification.severity, Severity::Medium);
    assert_eq!(t.status, TicketStatus::Classified);
}
