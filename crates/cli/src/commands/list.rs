// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use deflect_core::{Category, Database, Ticket, TicketStatus};

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::format_ticket_line;
use crate::error::Result;

pub fn run(status: Option<String>, category: Option<String>, output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    let tickets = run_impl(&db, status, category)?;

    match output {
        OutputFormat::Text => {
            for ticket in &tickets {
                println!("{}", format_ticket_line(ticket));
            }
        }
        OutputFormat::Id => {
            for ticket in &tickets {
                println!("{}", ticket.id);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&tickets)?);
        }
    }
    Ok(())
}

/// Internal implementation that accepts db for testing.
pub(crate) fn run_impl(
    db: &Database,
    status: Option<String>,
    category: Option<String>,
) -> Result<Vec<Ticket>> {
    let status = status.map(|s| s.parse::<TicketStatus>()).transpose()?;
    let category = category.map(|c| c.parse::<Category>()).transpose()?;
    Ok(db.list_tickets(status, category)?)
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
