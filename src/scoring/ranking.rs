// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: which documents match, and in what order.
//!
//! # Algorithm
//!
//! 1. Resolve postings per search term. Exact terms look up one posting list;
//!    prefix terms union the lists of every indexed term sharing the prefix.
//! 2. Keep documents that satisfy every term (`MatchMode::All`) or any term
//!    (`MatchMode::Any`).
//! 3. Score = Σ `weight(field) × frequency` over all matched postings.
//! 4. Sort by score descending, then location ascending.
//!
//! Location is unique, so the sort is a total order: identical queries
//! against an unchanged index always come back in identical order.

use crate::config::{MatchMode, SearchConfig};
use crate::error::SearchError;
use crate::index::InvertedIndex;
use crate::store::DocumentStore;
use crate::types::{FieldTag, Posting, SearchTerm};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{trace, warn};

/// One posting that contributed to a document's score.
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatch {
    /// Index of the search term in the parsed query.
    pub query_term: usize,
    /// The indexed term that matched (differs from the query token for
    /// prefix matches).
    pub term: String,
    pub field: FieldTag,
    pub frequency: u32,
    pub positions: Vec<u32>,
}

/// A scored candidate document.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDoc {
    pub location: String,
    pub score: f64,
    /// Contributing postings, in query-term order.
    pub matches: Vec<TermMatch>,
}

impl RankedDoc {
    /// First token position of a match in the body text, preferring earlier
    /// query terms.
    pub fn first_text_position(&self) -> Option<u32> {
        let first_term = self
            .matches
            .iter()
            .filter(|m| m.field == FieldTag::Text)
            .map(|m| m.query_term)
            .min()?;
        self.matches
            .iter()
            .filter(|m| m.field == FieldTag::Text && m.query_term == first_term)
            .filter_map(|m| m.positions.first().copied())
            .min()
    }
}

/// Cooperative cancellation for long candidate scans.
///
/// Cloning shares the flag, so one handle can cancel a search running on
/// another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
    #[cfg(test)]
    polls: Arc<std::sync::atomic::AtomicUsize>,
    #[cfg(test)]
    trip_at_poll: Option<usize>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also trips once `timeout` has elapsed.
    pub fn with_timeout(timeout: Duration) -> Self {
        CancelToken {
            deadline: Some(Instant::now() + timeout),
            ..Self::default()
        }
    }

    pub fn cancel(&self) {
        self.flag.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(AtomicOrdering::Relaxed)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    fn check(&self) -> Result<(), SearchError> {
        #[cfg(test)]
        {
            let poll = self.polls.fetch_add(1, AtomicOrdering::Relaxed) + 1;
            if self.trip_at_poll.is_some_and(|n| poll >= n) {
                self.cancel();
            }
        }
        if self.is_cancelled() {
            Err(SearchError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Postings scanned between cancellation checks.
const CANCEL_POLL_INTERVAL: usize = 256;

/// Compare two ranked documents: score descending, then location ascending.
pub fn compare_ranked(a: &RankedDoc, b: &RankedDoc) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.location.cmp(&b.location))
}

struct Candidate {
    satisfied: Vec<bool>,
    score: f64,
    matches: Vec<TermMatch>,
}

/// Postings for one search term, tagged with the indexed term they belong to.
fn resolve<'a>(index: &'a InvertedIndex, term: &'a SearchTerm) -> Vec<(&'a str, &'a [Posting])> {
    if term.is_prefix {
        index.prefix_terms(&term.token).collect()
    } else {
        index
            .postings(&term.token)
            .map(|postings| vec![(term.token.as_str(), postings)])
            .unwrap_or_default()
    }
}

/// Rank documents for a parsed query.
///
/// An empty term list ranks nothing.
pub fn rank(
    index: &InvertedIndex,
    store: &DocumentStore,
    terms: &[SearchTerm],
    config: &SearchConfig,
) -> Vec<RankedDoc> {
    match rank_inner(index, store, terms, config, None) {
        Ok(ranked) => ranked,
        // No token, nothing can cancel
        Err(_) => Vec::new(),
    }
}

/// Rank documents, aborting with [`SearchError::Cancelled`] once `cancel`
/// trips.
pub fn rank_with_cancel(
    index: &InvertedIndex,
    store: &DocumentStore,
    terms: &[SearchTerm],
    config: &SearchConfig,
    cancel: &CancelToken,
) -> Result<Vec<RankedDoc>, SearchError> {
    rank_inner(index, store, terms, config, Some(cancel))
}

fn rank_inner(
    index: &InvertedIndex,
    store: &DocumentStore,
    terms: &[SearchTerm],
    config: &SearchConfig,
    cancel: Option<&CancelToken>,
) -> Result<Vec<RankedDoc>, SearchError> {
    if terms.is_empty() {
        return Ok(Vec::new());
    }

    let weights = &config.weights;
    let mut candidates: HashMap<&str, Candidate> = HashMap::new();
    let mut scanned = 0usize;

    for (qi, term) in terms.iter().enumerate() {
        let resolved = resolve(index, term);
        trace!(term = %term.token, prefix = term.is_prefix, expansions = resolved.len(), "resolved term");

        // AND: a term with no postings at all empties the result
        if resolved.is_empty() && config.match_mode == MatchMode::All {
            return Ok(Vec::new());
        }

        for (indexed, postings) in resolved {
            for posting in postings {
                if let Some(cancel) = cancel {
                    if scanned % CANCEL_POLL_INTERVAL == 0 {
                        cancel.check()?;
                    }
                }
                scanned += 1;

                if !store.contains(&posting.location) {
                    warn!(location = %posting.location, "posting refers to a location missing from the store");
                    continue;
                }

                let candidate = candidates
                    .entry(posting.location.as_str())
                    .or_insert_with(|| Candidate {
                        satisfied: vec![false; terms.len()],
                        score: 0.0,
                        matches: Vec::new(),
                    });

                candidate.satisfied[qi] = true;
                candidate.score += weights.posting_score(posting.field, posting.frequency);
                candidate.matches.push(TermMatch {
                    query_term: qi,
                    term: indexed.to_string(),
                    field: posting.field,
                    frequency: posting.frequency,
                    positions: posting.positions.clone(),
                });
            }
        }
    }

    if let Some(cancel) = cancel {
        cancel.check()?;
    }

    let mut ranked: Vec<RankedDoc> = candidates
        .into_iter()
        .filter(|(_, c)| match config.match_mode {
            MatchMode::All => c.satisfied.iter().all(|&s| s),
            MatchMode::Any => c.satisfied.iter().any(|&s| s),
        })
        .map(|(location, c)| RankedDoc {
            location: location.to_string(),
            score: c.score,
            matches: c.matches,
        })
        .collect();

    ranked.sort_by(compare_ranked);
    Ok(ranked)
}
