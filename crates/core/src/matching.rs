// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage scoring and the auto-resolve / escalate decision.
//!
//! Scoring is asymmetric coverage, not symmetric similarity: the fraction
//! of the *ticket's* tokens found in the article. A two-word ticket fully
//! covered by a long article scores 1.0 regardless of how much extra
//! vocabulary the article carries, so short precise tickets deflect
//! readily against authoritative articles.

use std::collections::HashSet;

use crate::article::KnowledgeArticle;
use crate::error::Result;
use crate::ticket::{Ticket, TicketStatus};
use crate::token::tokenize;

/// Minimum coverage score required to auto-resolve instead of escalate.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Resolution snippets keep at most this many chars of article content.
const SNIPPET_CHARS: usize = 150;

/// Read-only access to the knowledge base.
///
/// Implementations must return articles in creation order; the matcher's
/// tie-break (first best scorer wins) depends on it.
pub trait ArticleSource {
    fn articles(&self) -> Result<Vec<KnowledgeArticle>>;
}

/// In-memory source, mainly for tests and embedding.
impl ArticleSource for Vec<KnowledgeArticle> {
    fn articles(&self) -> Result<Vec<KnowledgeArticle>> {
        Ok(self.clone())
    }
}

/// What the matcher decided, for the caller to log.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    /// The best coverage score seen, 0.0 when the knowledge base is empty.
    pub score: f64,
    /// The best-scoring article, even when it fell below the threshold.
    pub article: Option<KnowledgeArticle>,
}

/// Scores tickets against the knowledge base and applies the
/// resolve-or-escalate decision.
#[derive(Debug, Clone)]
pub struct Matcher {
    threshold: f64,
}

impl Default for Matcher {
    fn default() -> Self {
        Matcher::new(DEFAULT_THRESHOLD)
    }
}

impl Matcher {
    pub fn new(threshold: f64) -> Self {
        Matcher { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score the ticket against every article, pick the best candidate, and
    /// mutate the ticket's status and resolution accordingly.
    ///
    /// Selection uses strict `>`, so among equal scores the first article in
    /// creation order wins. An empty knowledge base always escalates: the
    /// best score starts at zero and no article can exceed it.
    pub fn resolve(&self, ticket: &mut Ticket, kb: &impl ArticleSource) -> Result<MatchOutcome> {
        let ticket_tokens = tokenize(&ticket.text());

        let mut best_score = 0.0;
        let mut best_article: Option<KnowledgeArticle> = None;

        for article in kb.articles()? {
            let score = coverage(&ticket_tokens, &article.tokens());
            if score > best_score {
                best_score = score;
                best_article = Some(article);
            }
        }

        match best_article {
            Some(ref article) if best_score >= self.threshold => {
                ticket.status = TicketStatus::AutoResolved;
                ticket.resolution = Some(format!("{}: {}", article.title, snippet(&article.content)));
            }
            _ => {
                ticket.status = TicketStatus::Escalated;
            }
        }

        Ok(MatchOutcome {
            score: best_score,
            article: best_article,
        })
    }

    /// Top-`limit` scoring articles for display, highest first.
    ///
    /// Zero-scoring articles are omitted. Uses the same coverage scorer as
    /// [`Matcher::resolve`]; the sort is stable, so ties keep creation order.
    pub fn rank(
        &self,
        ticket: &Ticket,
        kb: &impl ArticleSource,
        limit: usize,
    ) -> Result<Vec<(KnowledgeArticle, f64)>> {
        let ticket_tokens = tokenize(&ticket.text());

        let mut scored: Vec<(KnowledgeArticle, f64)> = kb
            .articles()?
            .into_iter()
            .map(|article| {
                let score = coverage(&ticket_tokens, &article.tokens());
                (article, score)
            })
            .filter(|(_, score)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);
        Ok(scored)
    }
}

/// Fraction of ticket tokens present in the article tokens, in [0, 1].
///
/// Asymmetric: `coverage(t, a)` and `coverage(a, t)` differ in general.
/// An empty ticket set scores 0.
pub fn coverage(ticket: &HashSet<String>, article: &HashSet<String>) -> f64 {
    if ticket.is_empty() {
        return 0.0;
    }
    let matched = ticket.intersection(article).count();
    matched as f64 / ticket.len() as f64
}

/// First [`SNIPPET_CHARS`] chars of content, with an ellipsis when truncated.
/// Counts chars, not bytes, so multi-byte content cannot split a boundary.
fn snippet(content: &str) -> String {
    let mut chars = content.char_indices();
    match chars.nth(SNIPPET_CHARS) {
        None => content.to_string(),
        Some((byte_end, _)) => format!("{}...", &content[..byte_end]),
    }
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod tests;
