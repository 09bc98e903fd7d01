// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(literal)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_triage}
  {submit}      Submit a ticket through the triage pipeline
  {resolve}     Re-run matching for an existing ticket
  {list}        List tickets
  {show}        Show ticket details with activity trail
  {log}         View a ticket's activity trail
  {simulate}    Batch-run the pipeline over sample tickets
  {metrics}     Deflection metrics

{header_setup}
  {init}        Initialize the triage store and seed the knowledge base
  {kb}          Inspect or extend the knowledge base
  {completion}  Generate shell completions",
        header_triage = colors::header("Triage:"),
        header_setup = colors::header("Setup & Knowledge Base:"),
        submit = colors::literal("submit"),
        resolve = colors::literal("resolve"),
        list = colors::literal("list"),
        show = colors::literal("show"),
        log = colors::literal("log"),
        simulate = colors::literal("simulate"),
        metrics = colors::literal("metrics"),
        init = colors::literal("init"),
        kb = colors::literal("kb"),
        completion = colors::literal("completion"),
    )
}
