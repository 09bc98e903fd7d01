// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use deflect_core::{seed, Database, Matcher, Pipeline, TicketRequest, TicketStatus};

use super::open_db;
use crate::config::Config;
use crate::error::Result;

/// Batch size bounds for one simulation run.
const MIN_COUNT: usize = 1;
const MAX_COUNT: usize = 100;

/// Outcome counts for one simulation batch.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub generated: usize,
    pub auto_resolved: usize,
    pub escalated: usize,
    pub by_category: BTreeMap<String, usize>,
}

pub fn run(count: usize, keep: bool) -> Result<()> {
    let (mut db, config, _work_dir) = open_db()?;
    let summary = run_impl(&mut db, &config, count, keep)?;

    println!(
        "Generated {} tickets: {} auto-resolved, {} escalated",
        summary.generated, summary.auto_resolved, summary.escalated
    );
    for (category, count) in &summary.by_category {
        println!("  {:<16} {}", category, count);
    }
    Ok(())
}

/// Internal implementation that accepts db/config for testing.
///
/// Unless `keep` is set, previously stored tickets and their trails are
/// cleared first so repeated demo batches do not accumulate.
pub(crate) fn run_impl(
    db: &mut Database,
    config: &Config,
    count: usize,
    keep: bool,
) -> Result<Summary> {
    let count = count.clamp(MIN_COUNT, MAX_COUNT);

    if !keep {
        db.clear_tickets()?;
    }

    let pipeline = Pipeline::new(Matcher::new(config.threshold), config.prefix.clone());
    let mut rng = rand::thread_rng();

    let mut summary = Summary {
        generated: count,
        auto_resolved: 0,
        escalated: 0,
        by_category: BTreeMap::new(),
    };

    for _ in 0..count {
        let (title, description, source) =
            seed::SAMPLE_TICKETS[rng.gen_range(0..seed::SAMPLE_TICKETS.len())];

        let outcome = pipeline.run(
            db,
            TicketRequest {
                title: title.to_string(),
                description: description.to_string(),
                source: source.to_string(),
            },
        )?;

        if outcome.ticket.status == TicketStatus::AutoResolved {
            summary.auto_resolved += 1;
        } else {
            summary.escalated += 1;
        }

        let category = outcome.classification.category.to_string();
        *summary.by_category.entry(category).or_insert(0) += 1;

        tracing::debug!(
            ticket = %outcome.ticket.id,
            status = %outcome.ticket.status,
            score = outcome.match_score,
            "simulated ticket"
        );
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "simulate_tests.rs"]
mod tests;
