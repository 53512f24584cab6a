// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary strings at the search API over the snapshot fixture.
//! It must never panic, and what it returns must be ordered and must come
//! from the corpus.

#![no_main]

use docsift::{build_index, read_corpus, search, SearchIndex, SearchOptions};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fuzz_target!(|query: &str| {
    // Fuzz runs from fuzz/, tests from the crate root
    static INDEX: OnceLock<SearchIndex> = OnceLock::new();
    let index = INDEX.get_or_init(|| {
        let records = ["tests/fixtures/search_index.js", "../tests/fixtures/search_index.js"]
            .iter()
            .find_map(|p| read_corpus(p).ok())
            .expect("Failed to read snapshot fixture from any path");
        build_index(records).expect("Failed to build index")
    });

    let results = search(index, query, SearchOptions::with_limit(50)).expect("paging is valid");
    assert!(results.len() <= 50);

    for pair in results.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].location < pair[1].location),
            "results out of order for {:?}",
            query
        );
    }
    for result in &results {
        assert!(result.score > 0.0);
        assert!(index.store().contains(&result.location));
        for range in &result.snippet.highlights {
            assert!(result.snippet.text.is_char_boundary(range.start));
            assert!(result.snippet.text.is_char_boundary(range.end));
        }
    }
});
