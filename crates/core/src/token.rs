// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text tokenization for lexical overlap scoring.

use std::collections::HashSet;

/// Separators a token can never contain: whitespace and commas.
const SEPARATORS: [char; 5] = [' ', '\t', ',', '\n', '\r'];

/// Punctuation stripped from token edges.
const EDGE_PUNCTUATION: [char; 16] = [
    '.', '!', '?', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}', '<', '>', '/',
];

/// Turn raw text into a normalized token set.
///
/// Tokens are lowercased, stripped of edge punctuation, and deduplicated;
/// repetition in the source text does not increase weight. Empty input
/// yields an empty set.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.split(SEPARATORS)
        .map(|raw| {
            raw.trim_matches(|c| EDGE_PUNCTUATION.contains(&c))
                .to_lowercase()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
