// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tokenizer.
//!
//! Spans must slice the normalized source on char boundaries, come out in
//! order, and never be empty. Lone combining marks, unassigned code points
//! and mixed scripts are all fair game.

#![no_main]

use docsift::{fold_case, tokenize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let stream = tokenize(text);
    let source = stream.source();

    let mut last_end = 0;
    for (i, token) in stream.iter().enumerate() {
        assert_eq!(token.position, i);
        assert!(token.span.start >= last_end, "overlapping spans");
        assert!(token.span.start < token.span.end, "empty token");
        assert!(source.is_char_boundary(token.span.start));
        assert!(source.is_char_boundary(token.span.end));
        assert_eq!(fold_case(&source[token.span.clone()]), token.text);
        last_end = token.span.end;
    }
});
