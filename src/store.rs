// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The validated, immutable corpus.
//!
//! A `DocumentStore` is built once from the ingested records and never
//! mutated. Input order is preserved so that every iteration over the corpus
//! (index construction, tests) is deterministic.
//!
//! # Invariants
//!
//! 1. **UNIQUE_LOCATION**: no two records share a `location`
//! 2. **NON_EMPTY_KEYS**: `location`, `page`, `title` are non-empty
//! 3. **LOOKUP_CONSISTENT**: `by_location[r.location]` is the index of `r`

use crate::error::ValidationError;
use crate::types::{Category, Record};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    records: Vec<Record>,
    by_location: HashMap<String, usize>,
}

impl DocumentStore {
    /// Validate and store a corpus.
    ///
    /// Fails on the first offending record, in input order.
    pub fn load(records: Vec<Record>) -> Result<Self, ValidationError> {
        let mut by_location: HashMap<String, usize> = HashMap::with_capacity(records.len());

        for (idx, record) in records.iter().enumerate() {
            validate_record(record)?;

            if by_location.insert(record.location.clone(), idx).is_some() {
                return Err(ValidationError::duplicate(record.location.clone()));
            }

            if record.category == Category::Section && record.fragment().is_none() {
                warn!(
                    location = %record.location,
                    "section record has no #fragment in its location"
                );
            }
        }

        debug!(records = records.len(), "document store loaded");

        Ok(DocumentStore {
            records,
            by_location,
        })
    }

    pub fn get(&self, location: &str) -> Option<&Record> {
        self.by_location
            .get(location)
            .and_then(|&idx| self.records.get(idx))
    }

    /// Input-order index of a record.
    pub fn position(&self, location: &str) -> Option<usize> {
        self.by_location.get(location).copied()
    }

    pub fn contains(&self, location: &str) -> bool {
        self.by_location.contains_key(location)
    }

    /// All records, in input order.
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(record: &Record) -> Result<(), ValidationError> {
    if record.location.is_empty() {
        return Err(ValidationError::missing("", "location"));
    }
    if record.page.is_empty() {
        return Err(ValidationError::missing(record.location.clone(), "page"));
    }
    if record.title.is_empty() {
        return Err(ValidationError::missing(record.location.clone(), "title"));
    }
    Ok(())
}
