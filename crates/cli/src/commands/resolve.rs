// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use deflect_core::{Database, KnowledgeArticle, Matcher, Ticket};

use super::open_db;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{format_score, format_ticket_line};
use crate::error::{Error, Result};

/// How many candidate articles to show alongside the decision.
const CANDIDATE_LIMIT: usize = 3;

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, config, _work_dir) = open_db()?;
    let (ticket, candidates) = run_impl(&db, &config, id)?;

    match output {
        OutputFormat::Text | OutputFormat::Id => {
            println!("{}", format_ticket_line(&ticket));
            if let Some(ref resolution) = ticket.resolution {
                println!("  {}", resolution);
            }
            if candidates.is_empty() {
                println!("No candidate articles scored above zero");
            } else {
                println!("Candidates:");
                for (article, score) in &candidates {
                    println!("  {}  {}", format_score(*score), article.title);
                }
            }
        }
        OutputFormat::Json => {
            let matches: Vec<serde_json::Value> = candidates
                .iter()
                .map(|(article, score)| {
                    serde_json::json!({
                        "article_id": article.id,
                        "title": article.title,
                        "score": score,
                    })
                })
                .collect();
            let json = serde_json::json!({
                "ticket": ticket,
                "matches": matches,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Internal implementation that accepts db/config for testing.
///
/// Refuses tickets already in a terminal state: re-running the matcher on an
/// auto-resolved ticket could demote it to escalated, and the pipeline's
/// status machine only moves forward.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    id: &str,
) -> Result<(Ticket, Vec<(KnowledgeArticle, f64)>)> {
    let mut ticket = db.get_ticket(id)?;
    if ticket.status.is_terminal() {
        return Err(Error::AlreadyTerminal {
            id: ticket.id,
            status: ticket.status.to_string(),
        });
    }

    let matcher = Matcher::new(config.threshold);
    matcher.resolve(&mut ticket, db)?;
    db.update_ticket(&ticket)?;

    let candidates = matcher.rank(&ticket, db, CANDIDATE_LIMIT)?;
    Ok((ticket, candidates))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
