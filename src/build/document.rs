// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ingestion schema.
//!
//! Producers emit records with exactly five fields:
//!
//! ```json
//! {"location": "adding/#Random-Sampling", "page": "Adding a New Measure",
//!  "title": "Random Sampling", "text": "", "category": "section"}
//! ```
//!
//! Every field deserializes as optional so that an *absent* field can be told
//! apart from an *empty* one. `text` may be empty; nothing may be absent.

use crate::error::ValidationError;
use crate::types::{Category, Record};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl RawRecord {
    /// Check presence of all fields and convert to a [`Record`].
    ///
    /// Only the strict category tags `"page"` and `"section"` are accepted.
    pub fn validate(self) -> Result<Record, ValidationError> {
        self.into_record_with(|location, tag| {
            Category::from_tag(tag).ok_or_else(|| ValidationError::unknown_category(location, tag))
        })
    }

    /// Convert with a caller-supplied category mapping.
    pub(crate) fn into_record_with(
        self,
        map_category: impl Fn(&str, &str) -> Result<Category, ValidationError>,
    ) -> Result<Record, ValidationError> {
        let location = self
            .location
            .filter(|l| !l.is_empty())
            .ok_or_else(|| ValidationError::missing("", "location"))?;
        let page = self
            .page
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ValidationError::missing(location.clone(), "page"))?;
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ValidationError::missing(location.clone(), "title"))?;
        let text = self
            .text
            .ok_or_else(|| ValidationError::missing(location.clone(), "text"))?;
        let tag = self
            .category
            .ok_or_else(|| ValidationError::missing(location.clone(), "category"))?;
        let category = map_category(&location, &tag)?;

        Ok(Record {
            location,
            page,
            title,
            text,
            category,
        })
    }
}

/// Parse a JSON array of strict ingestion records.
pub fn parse_records_json(json: &str) -> Result<Vec<Record>, ValidationError> {
    let raw: Vec<RawRecord> =
        serde_json::from_str(json).map_err(|e| ValidationError::malformed(e.to_string()))?;
    raw.into_iter().map(RawRecord::validate).collect()
}
