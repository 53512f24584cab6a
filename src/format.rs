// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning ranked locations into displayable results.
//!
//! The interesting part is the snippet: a bounded excerpt of the body text,
//! centered on the first match, cut only at token edges, with every matched
//! token marked so the UI can highlight it.
//!
//! # Snippet rules
//!
//! - The window grows outward from the anchor token, alternating right and
//!   left, while it fits in `max_chars`. The anchor itself is always kept,
//!   even if it alone is longer than the budget.
//! - No match in the body text (title/page-only hits) anchors at the start.
//! - Runs of whitespace collapse to one space. Code blocks in the corpus are
//!   full of newlines and indentation that mean nothing in a one-line excerpt.
//! - An ellipsis marks each end where text was cut.
//! - Highlights are byte ranges into the snippet text.

use crate::config::SnippetConfig;
use crate::scoring::ranking::RankedDoc;
use crate::store::DocumentStore;
use crate::tokenizer::{tokenize, Token};
use crate::types::{Category, Record};
use serde::Serialize;
use std::collections::HashSet;
use std::ops::Range;
use tracing::warn;

/// A bounded excerpt with highlighted spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub text: String,
    /// Byte ranges of matched tokens in `text`, ascending and disjoint.
    pub highlights: Vec<Range<usize>>,
}

impl Snippet {
    /// Wrap each highlighted span in `open`/`close` markers.
    ///
    /// ```
    /// use docsift::Snippet;
    ///
    /// let snippet = Snippet { text: "a Normal measure".into(), highlights: vec![2..8] };
    /// assert_eq!(snippet.render("<mark>", "</mark>"), "a <mark>Normal</mark> measure");
    /// ```
    pub fn render(&self, open: &str, close: &str) -> String {
        let mut out = String::with_capacity(self.text.len() + self.highlights.len() * 16);
        let mut cursor = 0;
        for range in &self.highlights {
            out.push_str(&self.text[cursor..range.start]);
            out.push_str(open);
            out.push_str(&self.text[range.clone()]);
            out.push_str(close);
            cursor = range.end;
        }
        out.push_str(&self.text[cursor..]);
        out
    }

    /// The highlighted substrings.
    pub fn highlighted(&self) -> Vec<&str> {
        self.highlights
            .iter()
            .map(|r| &self.text[r.clone()])
            .collect()
    }
}

/// One externally visible search result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub location: String,
    pub page: String,
    pub title: String,
    pub category: Category,
    /// Display path: the page for pages, `page » heading` for sections.
    pub breadcrumb: String,
    pub snippet: Snippet,
    pub score: f64,
}

fn breadcrumb(record: &Record) -> String {
    match record.category {
        Category::Page => record.page.clone(),
        Category::Section => format!("{} » {}", record.page, record.title),
    }
}

/// Format ranked documents into result records, preserving rank order.
pub fn format_results(
    store: &DocumentStore,
    ranked: &[RankedDoc],
    config: &SnippetConfig,
) -> Vec<ResultRecord> {
    ranked
        .iter()
        .filter_map(|doc| {
            let Some(record) = store.get(&doc.location) else {
                warn!(location = %doc.location, "ranked location missing from store");
                return None;
            };
            let highlight: HashSet<&str> = doc.matches.iter().map(|m| m.term.as_str()).collect();
            let snippet = extract_snippet(&record.text, doc.first_text_position(), &highlight, config);

            Some(ResultRecord {
                location: record.location.clone(),
                page: record.page.clone(),
                title: record.title.clone(),
                category: record.category,
                breadcrumb: breadcrumb(record),
                snippet,
                score: doc.score,
            })
        })
        .collect()
}

/// Char offsets of each token's start and end in the source.
fn char_bounds(source: &str, tokens: &[Token]) -> Vec<(usize, usize)> {
    let mut bounds = Vec::with_capacity(tokens.len());
    let mut byte = 0;
    let mut chars = 0;
    for token in tokens {
        chars += source[byte..token.span.start].chars().count();
        let start = chars;
        chars += source[token.span.clone()].chars().count();
        bounds.push((start, chars));
        byte = token.span.end;
    }
    bounds
}

/// Append `gap` with whitespace runs collapsed to a single space.
fn push_collapsed(out: &mut String, gap: &str) {
    for c in gap.chars() {
        if c.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
}

/// Extract a snippet from `text` around token position `anchor`.
///
/// `highlight` holds the case-folded indexed terms to mark.
pub fn extract_snippet(
    text: &str,
    anchor: Option<u32>,
    highlight: &HashSet<&str>,
    config: &SnippetConfig,
) -> Snippet {
    let stream = tokenize(text);
    let source = stream.source();
    let tokens: Vec<Token> = stream.iter().collect();
    let max = config.max_chars.max(1);

    if tokens.is_empty() {
        let mut out = String::new();
        push_collapsed(&mut out, source);
        let collapsed = out.trim_end();
        let mut text: String = collapsed.chars().take(max).collect();
        if collapsed.chars().count() > max {
            text.push_str(&config.ellipsis);
        }
        return Snippet {
            text,
            highlights: Vec::new(),
        };
    }

    let bounds = char_bounds(source, &tokens);
    let width = |lo: usize, hi: usize| bounds[hi].1 - bounds[lo].0;
    let n = tokens.len();

    let anchor = anchor.map(|p| p as usize).filter(|&p| p < n).unwrap_or(0);
    let (mut lo, mut hi) = (anchor, anchor);
    loop {
        let mut grew = false;
        if hi + 1 < n && width(lo, hi + 1) <= max {
            hi += 1;
            grew = true;
        }
        if lo > 0 && width(lo - 1, hi) <= max {
            lo -= 1;
            grew = true;
        }
        if !grew {
            break;
        }
    }

    // Pull in leading/trailing punctuation when the whole head/tail fits
    let total_chars = bounds[n - 1].1 + source[tokens[n - 1].span.end..].chars().count();
    let start_char = if lo == 0 && bounds[hi].1 <= max {
        0
    } else {
        bounds[lo].0
    };
    let start = if start_char == 0 { 0 } else { tokens[lo].span.start };
    let end = if hi == n - 1 && total_chars - start_char <= max {
        source.len()
    } else {
        tokens[hi].span.end
    };

    let mut out = String::new();
    let mut highlights = Vec::new();

    if start > 0 {
        out.push_str(&config.ellipsis);
    }

    let mut cursor = start;
    for token in &tokens[lo..=hi] {
        push_collapsed(&mut out, &source[cursor..token.span.start]);
        let begin = out.len();
        out.push_str(&source[token.span.clone()]);
        if highlight.contains(token.text.as_str()) {
            highlights.push(begin..out.len());
        }
        cursor = token.span.end;
    }
    push_collapsed(&mut out, &source[cursor..end]);
    if out.ends_with(' ') {
        out.pop();
    }

    if end < source.len() {
        out.push_str(&config.ellipsis);
    }

    Snippet {
        text: out,
        highlights,
    }
}
