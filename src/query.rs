// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing for search-as-you-type.
//!
//! The query goes through the same tokenizer as the corpus. Every token
//! becomes an exact-match term, except the last one, which is also allowed
//! to match as a prefix: while the user is typing `"norm"`, we should
//! already be finding `"normal"`.
//!
//! ```
//! use docsift::{parse_query, SearchTerm};
//!
//! assert_eq!(
//!     parse_query("Beta distrib"),
//!     vec![SearchTerm::exact("beta"), SearchTerm::prefix("distrib")]
//! );
//! assert!(parse_query("   ").is_empty());
//! ```

use crate::config::PrefixScope;
use crate::tokenizer::tokenize;
use crate::types::SearchTerm;

/// Parse a query, expanding only the last term as a prefix.
pub fn parse_query(query: &str) -> Vec<SearchTerm> {
    parse_query_with(query, PrefixScope::LastTerm)
}

/// Parse a query with an explicit prefix policy.
pub fn parse_query_with(query: &str, scope: PrefixScope) -> Vec<SearchTerm> {
    let mut terms: Vec<SearchTerm> = tokenize(query)
        .iter()
        .map(|token| SearchTerm {
            token: token.text,
            is_prefix: scope == PrefixScope::AllTerms,
        })
        .collect();

    if scope == PrefixScope::LastTerm {
        if let Some(last) = terms.last_mut() {
            last.is_prefix = true;
        }
    }

    terms
}
