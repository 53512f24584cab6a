// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet extraction.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{extract_snippet, tokenize_terms, SnippetConfig};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    anchor: Option<u32>,
    max_chars: u8,
    highlight: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let config = SnippetConfig {
        max_chars: input.max_chars as usize,
        ..SnippetConfig::default()
    };
    let terms = tokenize_terms(input.highlight);
    let highlight: HashSet<&str> = terms.iter().map(String::as_str).collect();

    let snippet = extract_snippet(input.text, input.anchor, &highlight, &config);

    let mut last_end = 0;
    for range in &snippet.highlights {
        assert!(range.start >= last_end);
        assert!(range.end <= snippet.text.len());
        assert!(snippet.text.is_char_boundary(range.start));
        assert!(snippet.text.is_char_boundary(range.end));
        last_end = range.end;
    }
});
