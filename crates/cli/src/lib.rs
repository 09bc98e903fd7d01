// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! deflectrs - support-ticket triage CLI library.
//!
//! This crate provides the command surface for the `deflect` CLI: a triage
//! pipeline that classifies incoming tickets, scores them against a local
//! knowledge base, and auto-resolves or escalates them with an ordered
//! activity trail.
//!
//! # Main Components
//!
//! - [`Config`] - project configuration (ID prefix, auto-resolve threshold)
//! - [`run`] - testable command dispatcher used by the binary
//! - `commands` - one module per subcommand
//!
//! The domain logic (tokenizer, classifier, matcher, pipeline, storage)
//! lives in the `deflect-core` crate.

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, KbCommand, OutputFormat};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Init {
            path,
            prefix,
            threshold,
            no_seed,
        } => commands::init::run(path, prefix, threshold, no_seed),
        Command::Submit {
            title,
            description,
            source,
            output,
        } => commands::submit::run(title, description, source, output),
        Command::Resolve { id, output } => commands::resolve::run(&id, output),
        Command::List {
            status,
            category,
            output,
        } => commands::list::run(status, category, output),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::Log { id } => commands::log::run(&id),
        Command::Simulate { count, keep } => commands::simulate::run(count, keep),
        Command::Metrics { output } => commands::metrics::run(output),
        Command::Kb(cmd) => match cmd {
            KbCommand::List { output } => commands::kb::list(output),
            KbCommand::Add {
                title,
                content,
                tag,
                category,
            } => commands::kb::add(title, content, tag, category),
        },
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "deflect", &mut std::io::stdout());
            Ok(())
        }
    }
}
