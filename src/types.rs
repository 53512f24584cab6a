// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model: records in, postings in the middle, ranked results out.
//!
//! | Type           | Role                                                  |
//! |----------------|-------------------------------------------------------|
//! | `Record`       | One addressable location in the rendered docs         |
//! | `Category`     | Whole page or anchored section                        |
//! | `FieldTag`     | Which record field a posting came from                |
//! | `Posting`      | (term, field, location) occurrence with positions     |
//! | `SearchTerm`   | A query token, exact or prefix                        |
//! | `SearchOptions`| Paging for `search`                                   |
//!
//! # Invariants
//!
//! - **Record**: `location`, `page`, `title` are non-empty; `location` is
//!   unique within a `DocumentStore`.
//! - **Posting**: `frequency == positions.len() ∧ frequency ≥ 1`, positions
//!   strictly increasing.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// Whole page or anchored subsection.
///
/// Serialized as the lowercase tags `"page"` / `"section"` used by corpus
/// producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Page,
    Section,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Page => "page",
            Category::Section => "section",
        }
    }

    /// Parse a strict ingestion tag. Only `"page"` and `"section"` are valid.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "page" => Some(Category::Page),
            "section" => Some(Category::Section),
            _ => None,
        }
    }
}

/// One searchable location: a page, or a section within a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key: a path, optionally with a `#fragment` for sections.
    pub location: String,
    /// Enclosing page name, used for grouping and display.
    pub page: String,
    /// Page title, or the section heading for `Section` records.
    pub title: String,
    /// Body text. May be empty (heading-only sections).
    pub text: String,
    pub category: Category,
}

impl Record {
    /// The text of a given field.
    pub fn field(&self, field: FieldTag) -> &str {
        match field {
            FieldTag::Title => &self.title,
            FieldTag::Page => &self.page,
            FieldTag::Text => &self.text,
        }
    }

    /// The `#fragment` part of the location, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.location.split_once('#').map(|(_, frag)| frag)
    }
}

/// Which record field a term occurrence came from.
///
/// Declaration order is the order fields are indexed in (and the order
/// postings for one record appear in a posting list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldTag {
    Title,
    Page,
    Text,
}

impl FieldTag {
    /// All fields, in indexing order.
    pub const ALL: [FieldTag; 3] = [FieldTag::Title, FieldTag::Page, FieldTag::Text];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldTag::Title => "title",
            FieldTag::Page => "page",
            FieldTag::Text => "text",
        }
    }
}

/// Where a term occurs within one field of one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Posting {
    pub location: String,
    pub field: FieldTag,
    /// Number of occurrences in the field. Always `positions.len()`.
    pub frequency: u32,
    /// Token offsets of each occurrence within the field's token sequence.
    pub positions: Vec<u32>,
}

/// One query term after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm {
    pub token: String,
    /// Match any indexed term starting with `token`.
    pub is_prefix: bool,
}

impl SearchTerm {
    pub fn exact(token: impl Into<String>) -> Self {
        SearchTerm {
            token: token.into(),
            is_prefix: false,
        }
    }

    pub fn prefix(token: impl Into<String>) -> Self {
        SearchTerm {
            token: token.into(),
            is_prefix: true,
        }
    }

    /// Does an indexed term satisfy this search term?
    pub fn matches(&self, indexed: &str) -> bool {
        if self.is_prefix {
            indexed.starts_with(self.token.as_str())
        } else {
            indexed == self.token
        }
    }
}

/// Paging options for `search`.
///
/// `limit: None` means "all results". `offset` past the end of the result
/// list is a caller bug and is reported, not clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: usize,
}

impl SearchOptions {
    pub fn with_limit(limit: usize) -> Self {
        SearchOptions {
            limit: Some(limit),
            offset: 0,
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Build options from signed values, as they arrive from loosely typed
    /// callers. Negative values are rejected.
    pub fn from_signed(limit: Option<i64>, offset: i64) -> Result<Self, SearchError> {
        let limit = match limit {
            Some(l) if l < 0 => {
                return Err(SearchError::InvalidQueryOptions {
                    reason: format!("limit must be >= 0, got {}", l),
                })
            }
            Some(l) => Some(l as usize),
            None => None,
        };
        if offset < 0 {
            return Err(SearchError::InvalidQueryOptions {
                reason: format!("offset must be >= 0, got {}", offset),
            });
        }
        Ok(SearchOptions {
            limit,
            offset: offset as usize,
        })
    }

    /// Apply paging to a result count, returning the selected index range.
    pub fn window(&self, total: usize) -> Result<std::ops::Range<usize>, SearchError> {
        if self.offset > total {
            return Err(SearchError::InvalidQueryOptions {
                reason: format!("offset {} is beyond result count {}", self.offset, total),
            });
        }
        let end = match self.limit {
            Some(limit) => self.offset.saturating_add(limit).min(total),
            None => total,
        };
        Ok(self.offset..end)
    }
}
