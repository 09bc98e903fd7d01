// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed storage for tickets, knowledge articles, and activity.
//!
//! The [`Database`] struct provides all data access operations. A pipeline
//! run's ticket and activity entries are committed together through
//! [`Database::persist_run`]; there is no partial-commit path.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::activity::ActivityLog;
use crate::article::KnowledgeArticle;
use crate::error::{Error, Result};
use crate::matching::ArticleSource;
use crate::ticket::{Category, Classification, Ticket, TicketStatus};

/// SQL schema for the triage database.
pub const SCHEMA: &str = r#"
-- Tickets; category/severity are NULL together until classification
CREATE TABLE IF NOT EXISTS tickets (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    source TEXT NOT NULL,
    category TEXT,
    severity TEXT,
    status TEXT NOT NULL DEFAULT 'new',
    resolution TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Knowledge base; tags stored comma-joined, read-only after seeding
CREATE TABLE IF NOT EXISTS articles (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    tags TEXT NOT NULL,
    category TEXT NOT NULL,
    created_at TEXT NOT NULL
);

-- Activity trail (append-only)
CREATE TABLE IF NOT EXISTS activity (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ticket_id TEXT NOT NULL,
    action TEXT NOT NULL,
    details TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (ticket_id) REFERENCES tickets(id)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_tickets_status ON tickets(status);
CREATE INDEX IF NOT EXISTS idx_tickets_category ON tickets(category);
CREATE INDEX IF NOT EXISTS idx_activity_ticket ON activity(ticket_id);
"#;

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Assemble a classification from its two nullable columns.
///
/// Both set and both NULL are the only valid shapes; a half-set pair means
/// the row was written outside this crate.
fn parse_classification(
    category: Option<String>,
    severity: Option<String>,
) -> std::result::Result<Option<Classification>, rusqlite::Error> {
    match (category, severity) {
        (None, None) => Ok(None),
        (Some(c), Some(s)) => Ok(Some(Classification {
            category: parse_db(&c, "category")?,
            severity: parse_db(&s, "severity")?,
        })),
        _ => Err(rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(
                "category and severity must be set together".to_string(),
            )),
        )),
    }
}

/// Split a comma-joined tags column into individual tags.
fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Run schema creation on a database connection. Idempotent.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection with triage storage operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Enable foreign keys and WAL mode for concurrency
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    // ── Tickets ──────────────────────────────────────────────────────────

    /// Insert a new ticket.
    pub fn create_ticket(&self, ticket: &Ticket) -> Result<()> {
        self.conn.execute(
            "INSERT INTO tickets (id, title, description, source, category, severity,
             status, resolution, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                ticket.id,
                ticket.title,
                ticket.description,
                ticket.source,
                ticket.classification.map(|c| c.category.as_str()),
                ticket.classification.map(|c| c.severity.as_str()),
                ticket.status.as_str(),
                ticket.resolution,
                ticket.created_at.to_rfc3339(),
                ticket.updated_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get a ticket by ID.
    pub fn get_ticket(&self, id: &str) -> Result<Ticket> {
        let ticket = self
            .conn
            .query_row(
                "SELECT id, title, description, source, category, severity,
                        status, resolution, created_at, updated_at
                 FROM tickets WHERE id = ?1",
                params![id],
                map_ticket_row,
            )
            .optional()?;

        ticket.ok_or_else(|| Error::TicketNotFound(id.to_string()))
    }

    /// Check if a ticket exists.
    pub fn ticket_exists(&self, id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM tickets WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Write back a ticket's mutable triage fields (classification, status,
    /// resolution) and bump `updated_at`.
    pub fn update_ticket(&self, ticket: &Ticket) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE tickets SET category = ?1, severity = ?2, status = ?3,
             resolution = ?4, updated_at = ?5 WHERE id = ?6",
            params![
                ticket.classification.map(|c| c.category.as_str()),
                ticket.classification.map(|c| c.severity.as_str()),
                ticket.status.as_str(),
                ticket.resolution,
                Utc::now().to_rfc3339(),
                ticket.id,
            ],
        )?;

        if affected == 0 {
            return Err(Error::TicketNotFound(ticket.id.clone()));
        }
        Ok(())
    }

    /// List tickets with optional status/category filters, newest first.
    pub fn list_tickets(
        &self,
        status: Option<TicketStatus>,
        category: Option<Category>,
    ) -> Result<Vec<Ticket>> {
        let mut sql = String::from(
            "SELECT id, title, description, source, category, severity,
             status, resolution, created_at, updated_at
             FROM tickets",
        );

        let mut conditions = Vec::new();
        let mut params_vec: Vec<String> = Vec::new();

        if let Some(s) = status {
            conditions.push("status = ?".to_string());
            params_vec.push(s.as_str().to_string());
        }

        if let Some(c) = category {
            conditions.push("category = ?".to_string());
            params_vec.push(c.as_str().to_string());
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        sql.push_str(" ORDER BY created_at DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();

        let tickets = stmt
            .query_map(params_refs.as_slice(), map_ticket_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(tickets)
    }

    /// Delete all tickets and their activity entries, in one transaction.
    /// Used by batch simulation to reset the demo slate.
    pub fn clear_tickets(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM activity", [])?;
        tx.execute("DELETE FROM tickets", [])?;
        tx.commit()?;
        Ok(())
    }

    // ── Knowledge articles ───────────────────────────────────────────────

    /// Insert a new knowledge article.
    pub fn create_article(&self, article: &KnowledgeArticle) -> Result<()> {
        self.conn.execute(
            "INSERT INTO articles (id, title, content, tags, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                article.id,
                article.title,
                article.content,
                article.tags.join(","),
                article.category.as_str(),
                article.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Get an article by ID.
    pub fn get_article(&self, id: &str) -> Result<KnowledgeArticle> {
        let article = self
            .conn
            .query_row(
                "SELECT id, title, content, tags, category, created_at
                 FROM articles WHERE id = ?1",
                params![id],
                map_article_row,
            )
            .optional()?;

        article.ok_or_else(|| Error::ArticleNotFound(id.to_string()))
    }

    /// Check if an article exists.
    pub fn article_exists(&self, id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM articles WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Number of articles in the knowledge base.
    pub fn article_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM articles", [], |row| row.get(0))?;
        Ok(count)
    }

    /// List all articles in creation order.
    ///
    /// This ordering is the matcher's tie-break contract: among articles
    /// with equal scores, the earliest-created wins.
    pub fn list_articles(&self) -> Result<Vec<KnowledgeArticle>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, tags, category, created_at
             FROM articles ORDER BY created_at ASC, id ASC",
        )?;

        let articles = stmt
            .query_map([], map_article_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(articles)
    }

    // ── Activity ─────────────────────────────────────────────────────────

    /// List a ticket's activity entries in append order.
    pub fn list_activity(&self, ticket_id: &str) -> Result<Vec<ActivityLog>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, ticket_id, action, details, created_at
             FROM activity WHERE ticket_id = ?1 ORDER BY id ASC",
        )?;

        let entries = stmt
            .query_map(params![ticket_id], map_activity_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Persist a completed pipeline run: the ticket and its full activity
    /// batch, in one transaction. Database-assigned entry IDs are written
    /// back into `activity`.
    ///
    /// Either everything commits or nothing does; a ticket without its
    /// trail (or a trail without its ticket) cannot be observed.
    pub fn persist_run(&mut self, ticket: &Ticket, activity: &mut [ActivityLog]) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO tickets (id, title, description, source, category, severity,
             status, resolution, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                ticket.id,
                ticket.title,
                ticket.description,
                ticket.source,
                ticket.classification.map(|c| c.category.as_str()),
                ticket.classification.map(|c| c.severity.as_str()),
                ticket.status.as_str(),
                ticket.resolution,
                ticket.created_at.to_rfc3339(),
                ticket.updated_at.to_rfc3339(),
            ],
        )?;

        for entry in activity.iter_mut() {
            tx.execute(
                "INSERT INTO activity (ticket_id, action, details, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    entry.ticket_id,
                    entry.action,
                    entry.details,
                    entry.created_at.to_rfc3339(),
                ],
            )?;
            entry.id = tx.last_insert_rowid();
        }

        tx.commit()?;
        Ok(())
    }
}

impl ArticleSource for Database {
    fn articles(&self) -> Result<Vec<KnowledgeArticle>> {
        self.list_articles()
    }
}

/// Map a tickets row to a [`Ticket`].
fn map_ticket_row(row: &rusqlite::Row<'_>) -> std::result::Result<Ticket, rusqlite::Error> {
    let category: Option<String> = row.get(4)?;
    let severity: Option<String> = row.get(5)?;
    let status: String = row.get(6)?;
    let created: String = row.get(8)?;
    let updated: String = row.get(9)?;

    Ok(Ticket {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        source: row.get(3)?,
        classification: parse_classification(category, severity)?,
        status: parse_db(&status, "status")?,
        resolution: row.get(7)?,
        created_at: parse_timestamp(&created, "created_at")?,
        updated_at: parse_timestamp(&updated, "updated_at")?,
    })
}

/// Map an articles row to a [`KnowledgeArticle`].
fn map_article_row(
    row: &rusqlite::Row<'_>,
) -> std::result::Result<KnowledgeArticle, rusqlite::Error> {
    let tags: String = row.get(3)?;
    let category: String = row.get(4)?;
    let created: String = row.get(5)?;

    Ok(KnowledgeArticle {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        tags: parse_tags(&tags),
        category: parse_db(&category, "category")?,
        created_at: parse_timestamp(&created, "created_at")?,
    })
}

/// Map an activity row to an [`ActivityLog`].
fn map_activity_row(
    row: &rusqlite::Row<'_>,
) -> std::result::Result<ActivityLog, rusqlite::Error> {
    let created: String = row.get(4)?;

    Ok(ActivityLog {
        id: row.get(0)?,
        ticket_id: row.get(1)?,
        action: row.get(2)?,
        details: row.get(3)?,
        created_at: parse_timestamp(&created, "created_at")?,
    })
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
