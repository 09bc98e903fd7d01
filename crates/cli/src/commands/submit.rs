// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use deflect_core::{Database, Matcher, Pipeline, PipelineOutcome, TicketRequest};

use super::open_db;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{format_activity_line, format_score};
use crate::error::Result;

pub fn run(title: String, description: String, source: String, output: OutputFormat) -> Result<()> {
    let (mut db, config, _work_dir) = open_db()?;
    let outcome = run_impl(&mut db, &config, title, description, source)?;
    print_outcome(&outcome, output)
}

/// Internal implementation that accepts db/config for testing.
pub(crate) fn run_impl(
    db: &mut Database,
    config: &Config,
    title: String,
    description: String,
    source: String,
) -> Result<PipelineOutcome> {
    let pipeline = Pipeline::new(Matcher::new(config.threshold), config.prefix.clone());
    let outcome = pipeline.run(
        db,
        TicketRequest {
            title,
            description,
            source,
        },
    )?;
    Ok(outcome)
}

fn print_outcome(outcome: &PipelineOutcome, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            println!(
                "Created [{}/{}] {}: {}",
                outcome.classification.category,
                outcome.classification.severity,
                outcome.ticket.id,
                outcome.ticket.title
            );
            match (&outcome.ticket.resolution, &outcome.matched_article_title) {
                (Some(resolution), Some(title)) => {
                    println!(
                        "Auto-resolved via '{}' (score: {})",
                        title,
                        format_score(outcome.match_score)
                    );
                    println!("  {}", resolution);
                }
                _ => {
                    println!(
                        "Escalated (best score: {})",
                        format_score(outcome.match_score)
                    );
                }
            }
            println!();
            for entry in &outcome.activity {
                println!("{}", format_activity_line(entry));
            }
        }
        OutputFormat::Id => {
            println!("{}", outcome.ticket.id);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(outcome)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "submit_tests.rs"]
mod tests;
