// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::db::Database;

#[test]
fn seeds_full_set_into_empty_store() {
    let db = Database::open_in_memory().unwrap();

    let inserted = seed_articles(&db).unwrap();

    assert_eq!(inserted, 12);
    assert_eq!(db.article_count().unwrap(), 12);
}

#[test]
fn seeding_is_idempotent() {
    let db = Database::open_in_memory().unwrap();
    seed_articles(&db).unwrap();

    let second = seed_articles(&db).unwrap();

    assert_eq!(second, 0);
    assert_eq!(db.article_count().unwrap(), 12);
}

#[test]
fn seeding_skips_partially_filled_store() {
    let db = Database::open_in_memory().unwrap();
    let article = KnowledgeArticle::new(
        "kb-custom".to_string(),
        "House Rules".to_string(),
        "Internal escalation policy.".to_string(),
        vec!["policy".to_string()],
        Category::Other,
        Utc::now(),
    );
    db.create_article(&article).unwrap();

    // Any existing article means the operator curated the KB; leave it alone
    assert_eq!(seed_articles(&db).unwrap(), 0);
    assert_eq!(db.article_count().unwrap(), 1);
}

#[test]
fn seeded_articles_have_tags_and_categories() {
    let db = Database::open_in_memory().unwrap();
    seed_articles(&db).unwrap();

    for article in db.list_articles().unwrap() {
        assert!(article.id.starts_with("kb-"));
        assert!(!article.title.is_empty());
        assert!(!article.content.is_empty());
        assert!(!article.tags.is_empty());
    }
}

#[test]
fn password_reset_article_is_present() {
    // The canonical deflection demo depends on this article
    let db = Database::open_in_memory().unwrap();
    seed_articles(&db).unwrap();

    let articles = db.list_articles().unwrap();
    let guide = articles
        .iter()
        .find(|a| a.title == "Password Reset Guide")
        .unwrap();
    assert!(guide.tags.contains(&"password".to_string()));
    assert!(guide.tags.contains(&"forgot".to_string()));
}

#[test]
fn sample_tickets_cover_every_source() {
    assert_eq!(SAMPLE_TICKETS.len(), 24);
    for (title, description, source) in SAMPLE_TICKETS {
        assert!(!title.is_empty());
        assert!(!description.is_empty());
        assert!(matches!(*source, "web" | "email" | "api"));
    }
}
