// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! Maps every term to the postings where it occurs. Built once from a
//! [`DocumentStore`], never mutated afterwards.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NON_EMPTY**: every term has at least one posting
//! 2. **DOCUMENT_ORDER**: each posting list is ordered by (record input order,
//!    field order Title < Page < Text), one posting per (term, field, location)
//! 3. **POSTING_WELLFORMED**: `frequency == positions.len() ≥ 1`, positions
//!    strictly increasing, `location` exists in the store
//! 4. **IDEMPOTENT**: building twice from the same store yields equal indexes
//!
//! Terms are kept in a `BTreeMap`. Sorted keys make prefix expansion a range
//! scan and make iteration order independent of hashing.

use crate::error::InvariantError;
use crate::store::DocumentStore;
use crate::tokenizer::tokenize;
use crate::types::{FieldTag, Posting, Record};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Immutable term → postings map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    terms: BTreeMap<String, Vec<Posting>>,
    total_docs: usize,
}

impl InvertedIndex {
    /// Postings for an exact term.
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    /// All indexed terms starting with `prefix`, in sorted order.
    pub fn prefix_terms<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [Posting])> + 'a {
        self.terms
            .range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// All terms in sorted order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[Posting])> {
        self.terms
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    pub fn posting_count(&self) -> usize {
        self.terms.values().map(Vec::len).sum()
    }

    /// Number of records the index was built from.
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    /// CRC32 over the canonical term/posting sequence.
    ///
    /// Two indexes with equal fingerprints are, for practical purposes, the
    /// same index. Used to check build idempotence across runs.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.total_docs as u64).to_le_bytes());
        for (term, postings) in &self.terms {
            hasher.update(term.as_bytes());
            hasher.update(&[0]);
            for posting in postings {
                hasher.update(posting.location.as_bytes());
                hasher.update(&[0]);
                hasher.update(posting.field.as_str().as_bytes());
                hasher.update(&posting.frequency.to_le_bytes());
                for pos in &posting.positions {
                    hasher.update(&pos.to_le_bytes());
                }
            }
        }
        hasher.finalize()
    }

    /// Verify the structural invariants against the store the index was
    /// built from.
    pub fn check_invariants(&self, store: &DocumentStore) -> Result<(), InvariantError> {
        for (term, postings) in &self.terms {
            if postings.is_empty() {
                return Err(InvariantError::EmptyPostingList { term: term.clone() });
            }

            let mut prev_key: Option<(usize, FieldTag)> = None;
            for (i, posting) in postings.iter().enumerate() {
                let Some(doc) = store.position(&posting.location) else {
                    return Err(InvariantError::UnknownLocation {
                        term: term.clone(),
                        location: posting.location.clone(),
                    });
                };

                if posting.frequency == 0 {
                    return Err(InvariantError::ZeroFrequency {
                        term: term.clone(),
                        location: posting.location.clone(),
                    });
                }

                if posting.frequency as usize != posting.positions.len() {
                    return Err(InvariantError::FrequencyMismatch {
                        term: term.clone(),
                        location: posting.location.clone(),
                        frequency: posting.frequency,
                        positions: posting.positions.len(),
                    });
                }

                if posting.positions.windows(2).any(|w| w[0] >= w[1]) {
                    return Err(InvariantError::UnsortedPositions {
                        term: term.clone(),
                        location: posting.location.clone(),
                    });
                }

                let key = (doc, posting.field);
                if prev_key.is_some_and(|prev| prev >= key) {
                    return Err(InvariantError::UnorderedPostings {
                        term: term.clone(),
                        position: i,
                    });
                }
                prev_key = Some(key);
            }
        }
        Ok(())
    }
}

/// Postings contributed by one record, in field order.
///
/// Within one field, terms come out in first-occurrence order. That order
/// does not leak into the index (each term has its own list), but keeping it
/// stable makes the per-record output easy to reason about in tests.
fn record_postings(record: &Record) -> Vec<(String, Posting)> {
    let mut out = Vec::new();

    for field in FieldTag::ALL {
        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut field_postings: Vec<(String, Posting)> = Vec::new();

        for token in tokenize(record.field(field)).iter() {
            let pos = token.position as u32;
            match slots.get(&token.text) {
                Some(&slot) => {
                    let posting = &mut field_postings[slot].1;
                    posting.frequency += 1;
                    posting.positions.push(pos);
                }
                None => {
                    slots.insert(token.text.clone(), field_postings.len());
                    field_postings.push((
                        token.text,
                        Posting {
                            location: record.location.clone(),
                            field,
                            frequency: 1,
                            positions: vec![pos],
                        },
                    ));
                }
            }
        }

        out.extend(field_postings);
    }

    out
}

fn merge(per_record: impl IntoIterator<Item = Vec<(String, Posting)>>, total_docs: usize) -> InvertedIndex {
    let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();
    for postings in per_record {
        for (term, posting) in postings {
            terms.entry(term).or_default().push(posting);
        }
    }

    let index = InvertedIndex { terms, total_docs };
    debug!(
        records = total_docs,
        terms = index.term_count(),
        postings = index.posting_count(),
        "inverted index built"
    );
    index
}

/// Build an inverted index from a document store.
///
/// Tokenizes `title`, `page` and `text` of every record and records one
/// posting per (term, field, location) with occurrence count and token
/// positions. Pure function of the store.
pub fn build_inverted_index(store: &DocumentStore) -> InvertedIndex {
    merge(store.all().iter().map(record_postings), store.len())
}

/// Build an inverted index with per-record tokenization spread over rayon.
///
/// Postings are merged back in record order, so the result is identical to
/// [`build_inverted_index`].
#[cfg(feature = "parallel")]
pub fn build_inverted_index_parallel(store: &DocumentStore) -> InvertedIndex {
    let per_record: Vec<Vec<(String, Posting)>> =
        store.all().par_iter().map(record_postings).collect();
    merge(per_record, store.len())
}
