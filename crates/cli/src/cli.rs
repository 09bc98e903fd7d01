// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Id,
}

#[derive(Parser)]
#[command(name = "deflect")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A support-ticket triage pipeline with knowledge-base deflection")]
#[command(
    long_about = "A support-ticket triage pipeline.\n\n\
    Classifies incoming tickets by keyword rules, scores them against a local\n\
    knowledge base, and either auto-resolves or escalates - leaving an ordered\n\
    activity trail for every decision."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(styles = help::styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Triage
    // ─────────────────────────────────────────────────────────────────────────
    /// Submit a ticket and run the full triage pipeline
    #[command(after_help = colors::examples("\
Examples:
  deflect submit \"forgot password\"                     Two words, usually deflects
  deflect submit \"Crash on save\" -d \"dies on click\"    Title plus description
  deflect submit \"Export stuck\" -s email               Tag the origin channel
  deflect submit \"How to export\" -o json               Full outcome as JSON"))]
    Submit {
        /// Ticket title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Longer free-text description
        #[arg(long, short, default_value = "")]
        description: String,

        /// Origin tag (e.g. web, email, api)
        #[arg(long, short, default_value = "cli")]
        source: String,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Re-run matching for an existing ticket (new or classified only)
    #[command(arg_required_else_help = true)]
    Resolve {
        /// Ticket ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List tickets
    #[command(after_help = colors::examples("\
Examples:
  deflect list                         All tickets, newest first
  deflect list --status escalated      Only escalated tickets
  deflect list --category bug -o json  Bug tickets as JSON"))]
    List {
        /// Filter by status (new, classified, auto_resolved, escalated)
        #[arg(long, short)]
        status: Option<String>,

        /// Filter by category (bug, how_to, feature_request, account_issue, other)
        #[arg(long, short)]
        category: Option<String>,

        /// Output format (text, json, id)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a ticket with its activity trail
    #[command(arg_required_else_help = true)]
    Show {
        /// Ticket ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// View a ticket's activity trail
    #[command(arg_required_else_help = true)]
    Log {
        /// Ticket ID
        id: String,
    },

    /// Run the pipeline over a batch of sample tickets
    #[command(after_help = colors::examples("\
Examples:
  deflect simulate            10 sample tickets on a clean slate
  deflect simulate -n 50      Larger batch (clamped to 1-100)
  deflect simulate --keep     Keep previously stored tickets"))]
    Simulate {
        /// Number of tickets to generate (clamped to 1-100)
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,

        /// Keep existing tickets instead of clearing the slate first
        #[arg(long)]
        keep: bool,
    },

    /// Deflection metrics across all stored tickets
    Metrics {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup & knowledge base
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize the triage store and seed the knowledge base
    Init {
        /// Directory to initialize (defaults to the current directory)
        path: Option<PathBuf>,

        /// Ticket ID prefix
        #[arg(long, short, default_value = crate::config::DEFAULT_PREFIX)]
        prefix: String,

        /// Auto-resolve threshold (0.0 - 1.0)
        #[arg(long, short, default_value_t = deflect_core::DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Skip seeding the default knowledge base
        #[arg(long)]
        no_seed: bool,
    },

    /// Inspect or extend the knowledge base
    #[command(subcommand)]
    Kb(KbCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum KbCommand {
    /// List knowledge articles in creation order
    List {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Add a knowledge article
    Add {
        /// Article title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Article content (prose)
        #[arg(long, short, value_parser = non_empty_string)]
        content: String,

        /// Tag(s) for matching (comma-separated or repeated)
        #[arg(long, short)]
        tag: Vec<String>,

        /// Article category
        #[arg(long, default_value = "other")]
        category: String,
    },
}
