// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: where the rubber meets the road.
//!
//! ```text
//! query ──▶ parse_query ──▶ rank ──▶ page ──▶ format_results ──▶ results
//! ```
//!
//! A [`SearchIndex`] bundles the immutable document store, the inverted index
//! built from it, and the configuration. It is built once at startup and
//! shared by reference (or `Arc`) across every caller. Nothing in the query
//! path takes `&mut`, so concurrent searches need no locks.

use crate::config::SearchConfig;
use crate::error::{SearchError, ValidationError};
use crate::format::{format_results, ResultRecord};
use crate::index::{build_inverted_index, InvertedIndex};
use crate::query::parse_query_with;
use crate::scoring::ranking::{rank, rank_with_cancel, CancelToken, RankedDoc};
use crate::store::DocumentStore;
use crate::types::{Record, SearchOptions};
use std::time::Instant;
use tracing::debug;

#[cfg(feature = "parallel")]
use crate::index::build_inverted_index_parallel;

/// Corpora at least this large are tokenized in parallel.
#[cfg(feature = "parallel")]
const PARALLEL_BUILD_THRESHOLD: usize = 256;

/// The complete, immutable searchable corpus.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    store: DocumentStore,
    index: InvertedIndex,
    config: SearchConfig,
}

impl SearchIndex {
    /// Validate records and build the index with a given configuration.
    pub fn build(records: Vec<Record>, config: SearchConfig) -> Result<Self, ValidationError> {
        let started = Instant::now();
        let store = DocumentStore::load(records)?;

        #[cfg(feature = "parallel")]
        let index = if store.len() >= PARALLEL_BUILD_THRESHOLD {
            build_inverted_index_parallel(&store)
        } else {
            build_inverted_index(&store)
        };
        #[cfg(not(feature = "parallel"))]
        let index = build_inverted_index(&store);

        debug!(
            records = store.len(),
            terms = index.term_count(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search index ready"
        );

        Ok(SearchIndex {
            store,
            index,
            config,
        })
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Score and order every matching location, without paging or snippets.
    pub fn rank(&self, query: &str) -> Vec<RankedDoc> {
        let terms = parse_query_with(query, self.config.prefix_scope);
        rank(&self.index, &self.store, &terms, &self.config)
    }

    /// Run a query and format one page of results.
    pub fn search(
        &self,
        query: &str,
        opts: SearchOptions,
    ) -> Result<Vec<ResultRecord>, SearchError> {
        let started = Instant::now();
        let ranked = self.rank(query);
        let results = self.page(&ranked, opts)?;
        debug!(
            query,
            matches = ranked.len(),
            returned = results.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search"
        );
        Ok(results)
    }

    /// Like [`SearchIndex::search`], aborting once `cancel` trips.
    pub fn search_with_cancel(
        &self,
        query: &str,
        opts: SearchOptions,
        cancel: &CancelToken,
    ) -> Result<Vec<ResultRecord>, SearchError> {
        let terms = parse_query_with(query, self.config.prefix_scope);
        let ranked = rank_with_cancel(&self.index, &self.store, &terms, &self.config, cancel)?;
        self.page(&ranked, opts)
    }

    fn page(
        &self,
        ranked: &[RankedDoc],
        opts: SearchOptions,
    ) -> Result<Vec<ResultRecord>, SearchError> {
        let window = opts.window(ranked.len())?;
        Ok(format_results(
            &self.store,
            &ranked[window],
            &self.config.snippet,
        ))
    }
}

/// Build a search index with the default configuration.
pub fn build_index(records: Vec<Record>) -> Result<SearchIndex, ValidationError> {
    SearchIndex::build(records, SearchConfig::default())
}

/// Build a search index with an explicit configuration.
pub fn build_index_with(
    records: Vec<Record>,
    config: SearchConfig,
) -> Result<SearchIndex, ValidationError> {
    SearchIndex::build(records, config)
}

/// Run a query against an index.
///
/// Empty and zero-match queries return `Ok(vec![])`. Only bad paging options
/// are errors.
pub fn search(
    index: &SearchIndex,
    query: &str,
    opts: SearchOptions,
) -> Result<Vec<ResultRecord>, SearchError> {
    index.search(query, opts)
}
