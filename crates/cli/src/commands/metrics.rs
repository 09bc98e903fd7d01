// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::BTreeMap;

use serde::Serialize;

use deflect_core::{Database, TicketStatus};

use super::open_db;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Aggregate deflection metrics over all stored tickets.
#[derive(Debug, Serialize)]
pub struct Overview {
    pub total_tickets: usize,
    pub auto_resolved: usize,
    pub escalated: usize,
    /// Fraction of tickets deflected, 0.0 when the store is empty.
    pub resolution_rate: f64,
    pub by_category: BTreeMap<String, usize>,
    pub by_severity: BTreeMap<String, usize>,
}

pub fn run(output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    let overview = run_impl(&db)?;

    match output {
        OutputFormat::Text | OutputFormat::Id => {
            println!("Tickets:         {}", overview.total_tickets);
            println!("Auto-resolved:   {}", overview.auto_resolved);
            println!("Escalated:       {}", overview.escalated);
            println!("Deflection rate: {:.0}%", overview.resolution_rate * 100.0);
            if !overview.by_category.is_empty() {
                println!("By category:");
                for (category, count) in &overview.by_category {
                    println!("  {:<16} {}", category, count);
                }
            }
            if !overview.by_severity.is_empty() {
                println!("By severity:");
                for (severity, count) in &overview.by_severity {
                    println!("  {:<16} {}", severity, count);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&overview)?);
        }
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(db: &Database) -> Result<Overview> {
    let tickets = db.list_tickets(None, None)?;

    let total = tickets.len();
    let auto_resolved = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::AutoResolved)
        .count();
    let escalated = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Escalated)
        .count();
    let resolution_rate = if total > 0 {
        auto_resolved as f64 / total as f64
    } else {
        0.0
    };

    let mut by_category = BTreeMap::new();
    let mut by_severity = BTreeMap::new();
    for classification in tickets.iter().filter_map(|t| t.classification) {
        *by_category
            .entry(classification.category.to_string())
            .or_insert(0) += 1;
        *by_severity
            .entry(classification.severity.to_string())
            .or_insert(0) += 1;
    }

    Ok(Overview {
        total_tickets: total,
        auto_resolved,
        escalated,
        resolution_rate,
        by_category,
        by_severity,
    })
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
