// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Three families, three lifetimes:
//!
//! - [`ValidationError`]: the corpus is malformed. Fatal to index construction.
//! - [`SearchError`]: the caller passed bad paging options, or cancelled.
//!   Empty and zero-match queries are NOT errors.
//! - [`InvariantError`]: an index that violates its own structural rules.
//!   Only reachable through `InvertedIndex::check_invariants`; a correct
//!   build never produces one.

use thiserror::Error;

/// What was wrong with a corpus record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share a location.
    DuplicateLocation,
    /// A mandatory field is absent (or empty, for `location`/`page`/`title`).
    MissingField { field: &'static str },
    /// `category` is neither `"page"` nor `"section"`.
    UnknownCategory { value: String },
    /// The ingestion payload could not be parsed at all.
    Malformed { reason: String },
}

/// A corpus record failed validation.
///
/// `location` identifies the offending record. It is empty when the location
/// itself is the missing field, or when the payload was unparseable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", describe(.kind, .location))]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub location: String,
}

fn describe(kind: &ValidationErrorKind, location: &str) -> String {
    match kind {
        ValidationErrorKind::DuplicateLocation => {
            format!("duplicate location '{}'", location)
        }
        ValidationErrorKind::MissingField { field } => {
            format!("record '{}' is missing field '{}'", location, field)
        }
        ValidationErrorKind::UnknownCategory { value } => {
            format!("record '{}' has unknown category '{}'", location, value)
        }
        ValidationErrorKind::Malformed { reason } => {
            format!("malformed corpus: {}", reason)
        }
    }
}

impl ValidationError {
    pub fn duplicate(location: impl Into<String>) -> Self {
        ValidationError {
            kind: ValidationErrorKind::DuplicateLocation,
            location: location.into(),
        }
    }

    pub fn missing(location: impl Into<String>, field: &'static str) -> Self {
        ValidationError {
            kind: ValidationErrorKind::MissingField { field },
            location: location.into(),
        }
    }

    pub fn unknown_category(location: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError {
            kind: ValidationErrorKind::UnknownCategory {
                value: value.into(),
            },
            location: location.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        ValidationError {
            kind: ValidationErrorKind::Malformed {
                reason: reason.into(),
            },
            location: String::new(),
        }
    }
}

/// Query-time failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid query options: {reason}")]
    InvalidQueryOptions { reason: String },

    #[error("search cancelled")]
    Cancelled,
}

/// Structural violations of a built inverted index.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("posting list for '{term}' is empty")]
    EmptyPostingList { term: String },

    #[error("posting for '{term}' refers to unknown location '{location}'")]
    UnknownLocation { term: String, location: String },

    #[error("posting for '{term}' at '{location}' has zero frequency")]
    ZeroFrequency { term: String, location: String },

    #[error(
        "posting for '{term}' at '{location}' has frequency {frequency} but {positions} positions"
    )]
    FrequencyMismatch {
        term: String,
        location: String,
        frequency: u32,
        positions: usize,
    },

    #[error("positions for '{term}' at '{location}' are not strictly increasing")]
    UnsortedPositions { term: String, location: String },

    #[error("posting list for '{term}' is not in document order at position {position}")]
    UnorderedPostings { term: String, position: usize },
}
