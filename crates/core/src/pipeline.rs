// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The triage pipeline orchestrator.
//!
//! A run is a single deterministic pass over one ticket:
//! Create -> Classify -> Match -> persist. Each stage appends to the
//! ticket's activity trail, and the trail is committed together with the
//! ticket in one transaction. The matcher is the only component that
//! computes scores; the orchestrator logs the score the matcher returned
//! rather than recomputing it.

use chrono::Utc;
use serde::Serialize;

use crate::activity::ActivityLog;
use crate::classify;
use crate::db::Database;
use crate::error::Result;
use crate::id::generate_unique_id;
use crate::matching::Matcher;
use crate::ticket::{Classification, Ticket, TicketStatus};

/// Raw ticket fields supplied by the invoking collaborator.
#[derive(Debug, Clone)]
pub struct TicketRequest {
    pub title: String,
    pub description: String,
    pub source: String,
}

/// The composed result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineOutcome {
    /// The ticket in its final, persisted state.
    pub ticket: Ticket,
    /// Category and severity the classifier assigned.
    pub classification: Classification,
    /// Title of the best-scoring article, if any article scored above zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_article_title: Option<String>,
    /// The best coverage score, as computed by the matcher.
    pub match_score: f64,
    /// The full activity trail, in stage order. Always at least 3 entries.
    pub activity: Vec<ActivityLog>,
}

/// Sequences the classifier and matcher over a newly created ticket.
#[derive(Debug, Clone)]
pub struct Pipeline {
    matcher: Matcher,
    prefix: String,
}

impl Pipeline {
    pub fn new(matcher: Matcher, prefix: impl Into<String>) -> Self {
        Pipeline {
            matcher,
            prefix: prefix.into(),
        }
    }

    /// Run the full triage pass for one incoming request.
    ///
    /// The ticket and its activity entries are persisted atomically; a
    /// storage failure surfaces as an error and leaves nothing behind.
    pub fn run(&self, db: &mut Database, request: TicketRequest) -> Result<PipelineOutcome> {
        let created_at = Utc::now();
        let id = generate_unique_id(&self.prefix, &request.title, &created_at, |candidate| {
            db.ticket_exists(candidate).unwrap_or(false)
        });

        // Stage 1: create
        let mut ticket = Ticket::new(
            id,
            request.title,
            request.description,
            request.source,
            created_at,
        );
        let mut activity = vec![ActivityLog::new(&ticket.id, "Ticket Created")
            .with_details(format!("Source: {}", ticket.source))];

        // Stage 2: classify
        let classification = classify::classify(&mut ticket);
        activity.push(ActivityLog::new(
            &ticket.id,
            format!(
                "Ticket Classified as {}/{}",
                classification.category, classification.severity
            ),
        ));

        // Stage 3: match
        let outcome = self.matcher.resolve(&mut ticket, &*db)?;
        if ticket.status == TicketStatus::AutoResolved {
            // resolve() only auto-resolves with a best article present
            let title = outcome
                .article
                .as_ref()
                .map(|a| a.title.clone())
                .unwrap_or_default();
            activity.push(
                ActivityLog::new(
                    &ticket.id,
                    format!("Ticket Matched (score: {:.2})", outcome.score),
                )
                .with_details(format!("Article: {}", title)),
            );
            activity.push(
                ActivityLog::new(&ticket.id, format!("Ticket Auto-Resolved: {}", title))
                    .with_details(ticket.resolution.clone().unwrap_or_default()),
            );
        } else {
            activity.push(ActivityLog::new(
                &ticket.id,
                "Ticket Escalated (no match above threshold)",
            ));
            activity.push(ActivityLog::new(
                &ticket.id,
                "Ticket Escalated: no matching articles",
            ));
        }

        // Stage 4: persist ticket + trail together
        db.persist_run(&ticket, &mut activity)?;

        Ok(PipelineOutcome {
            matched_article_title: outcome.article.map(|a| a.title),
            match_score: outcome.score,
            classification,
            ticket,
            activity,
        })
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
