// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus parsing.
//!
//! Malformed snapshots must come back as validation errors, never panics.
//! Whatever parses must also load into a store and build a well-formed index.

#![no_main]

use docsift::{build_inverted_index, parse_corpus, DocumentStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|content: &str| {
    let Ok(records) = parse_corpus(content) else {
        return;
    };
    let Ok(store) = DocumentStore::load(records) else {
        return;
    };
    let index = build_inverted_index(&store);
    index
        .check_invariants(&store)
        .expect("index built from a valid store is well formed");
});
