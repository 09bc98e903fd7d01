// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Knowledge-base articles used as deflection candidates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::ticket::Category;
use crate::token::tokenize;

/// A titled, tagged prose document the matcher scores tickets against.
///
/// Articles are created by the seeding collaborator and are read-only for
/// the rest of their life; the pipeline never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeArticle {
    /// Unique identifier (format: `kb-{hash}`).
    pub id: String,
    pub title: String,
    /// Prose body; the first 150 chars become the resolution snippet.
    pub content: String,
    /// Free-form labels that participate in matching alongside the content.
    pub tags: Vec<String>,
    pub category: Category,
    /// Creation order doubles as the matcher's tie-break order.
    pub created_at: DateTime<Utc>,
}

impl KnowledgeArticle {
    pub fn new(
        id: String,
        title: String,
        content: String,
        tags: Vec<String>,
        category: Category,
        created_at: DateTime<Utc>,
    ) -> Self {
        KnowledgeArticle {
            id,
            title,
            content,
            tags,
            category,
            created_at,
        }
    }

    /// The token set the matcher scores against: content plus tags.
    pub fn tokens(&self) -> HashSet<String> {
        let mut tokens = tokenize(&self.content);
        tokens.extend(tokenize(&self.tags.join(",")));
        tokens
    }
}

#[cfg(test)]
#[path = "article_tests.rs"]
mod tests;
