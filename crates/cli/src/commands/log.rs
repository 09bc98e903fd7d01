// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::open_db;
use crate::display::format_activity_line;
use crate::error::Result;

pub fn run(id: &str) -> Result<()> {
    let (db, _, _) = open_db()?;

    // Surface a proper not-found error rather than an empty trail
    let ticket = db.get_ticket(id)?;

    for entry in db.list_activity(&ticket.id)? {
        println!("{}", format_activity_line(&entry));
    }
    Ok(())
}
