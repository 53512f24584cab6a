// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docsift CLI.
//!
//! Colors and bold highlights when stdout is a terminal, plain text (with
//! `[brackets]` around matches) when it is piped. Respects `NO_COLOR`.

use docsift::{InvertedIndex, ResultRecord};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREEN: &str = "\x1b[32m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Render a snippet with highlight markers suited to the output.
fn render_snippet(result: &ResultRecord) -> String {
    if use_colors() {
        let open = format!("{}{}", BOLD, YELLOW);
        result.snippet.render(&open, RESET)
    } else {
        result.snippet.render("[", "]")
    }
}

pub fn print_results(results: &[ResultRecord], offset: usize) {
    if results.is_empty() {
        println!("{}", styled(&[DIM], "no results"));
        return;
    }

    for (i, result) in results.iter().enumerate() {
        println!(
            "{:>3}. {}  {}",
            offset + i + 1,
            styled(&[BOLD], &result.breadcrumb),
            styled(&[DIM], &format!("score {:.1}", result.score))
        );
        println!("     {}", styled(&[CYAN], &result.location));
        if !result.snippet.text.is_empty() {
            println!("     {}", render_snippet(result));
        }
        println!();
    }
}

pub fn print_inspect(records: usize, index: &InvertedIndex, top: usize) {
    println!("{}", styled(&[BOLD], "Index summary"));
    println!("  records      {}", styled(&[GREEN], &records.to_string()));
    println!("  terms        {}", styled(&[GREEN], &index.term_count().to_string()));
    println!("  postings     {}", styled(&[GREEN], &index.posting_count().to_string()));
    println!(
        "  fingerprint  {}",
        styled(&[CYAN], &format!("{:08x}", index.fingerprint()))
    );

    if top == 0 {
        return;
    }

    // Rank terms by total occurrences, ties alphabetical (terms() is sorted)
    let mut by_frequency: Vec<(&str, u32)> = index
        .terms()
        .map(|(term, postings)| (term, postings.iter().map(|p| p.frequency).sum()))
        .collect();
    by_frequency.sort_by(|a, b| b.1.cmp(&a.1));

    println!();
    println!("{}", styled(&[BOLD], "Most frequent terms"));
    for (term, count) in by_frequency.into_iter().take(top) {
        println!("  {:<24} {}", term, styled(&[DIM], &count.to_string()));
    }
}
