// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;

use deflect_core::id::generate_unique_id;
use deflect_core::{Category, Database, KnowledgeArticle};

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_article_line;
use crate::error::Result;

/// Prefix for knowledge article IDs.
const ARTICLE_PREFIX: &str = "kb";

pub fn list(output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    let articles = db.list_articles()?;

    match output {
        OutputFormat::Text | OutputFormat::Id => {
            for article in &articles {
                println!("{}", format_article_line(article));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
    }
    Ok(())
}

pub fn add(title: String, content: String, tags: Vec<String>, category: String) -> Result<()> {
    let (db, _, _) = open_db()?;
    let article = add_impl(&db, title, content, tags, category)?;
    println!("Added {} {}", article.id, article.title);
    Ok(())
}

/// Expand comma-separated tags into individual tags.
/// For example, ["a,b", "c"] becomes ["a", "b", "c"].
pub(crate) fn expand_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .flat_map(|tag| tag.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Internal implementation that accepts db for testing.
pub(crate) fn add_impl(
    db: &Database,
    title: String,
    content: String,
    tags: Vec<String>,
    category: String,
) -> Result<KnowledgeArticle> {
    let category: Category = category.parse()?;
    let created_at = Utc::now();
    let id = generate_unique_id(ARTICLE_PREFIX, &title, &created_at, |candidate| {
        db.article_exists(candidate).unwrap_or(false)
    });

    let article = KnowledgeArticle::new(
        id,
        title,
        content,
        expand_tags(&tags),
        category,
        created_at,
    );
    db.create_article(&article)?;
    Ok(article)
}

#[cfg(test)]
#[path = "kb_tests.rs"]
mod tests;
