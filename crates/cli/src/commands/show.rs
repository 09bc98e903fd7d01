// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::open_db;
use crate::cli::OutputFormat;
use crate::display::{format_activity_line, format_ticket_line};
use crate::error::Result;

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, _, _) = open_db()?;
    let ticket = db.get_ticket(id)?;
    let activity = db.list_activity(id)?;

    match output {
        OutputFormat::Text | OutputFormat::Id => {
            println!("{}", format_ticket_line(&ticket));
            println!("  source: {}", ticket.source);
            if !ticket.description.is_empty() {
                println!("  {}", ticket.description);
            }
            if let Some(ref resolution) = ticket.resolution {
                println!("  resolution: {}", resolution);
            }
            if !activity.is_empty() {
                println!();
                for entry in &activity {
                    println!("{}", format_activity_line(entry));
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "ticket": ticket,
                "activity": activity,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}
