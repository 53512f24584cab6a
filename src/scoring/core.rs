// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field weights.
//!
//! | Field | Default | Meaning                                     |
//! |-------|---------|---------------------------------------------|
//! | Title | 5.0     | Page title or section heading               |
//! | Page  | 3.0     | Enclosing page name                         |
//! | Text  | 1.0     | Body paragraph                              |
//!
//! The constants are policy, not contract. They live in one place
//! ([`FieldWeights`]) and reach the ranker only through `SearchConfig`.

use crate::types::FieldTag;
use serde::{Deserialize, Serialize};

/// Default weight for Title matches.
pub const TITLE_WEIGHT: f64 = 5.0;

/// Default weight for Page matches.
pub const PAGE_WEIGHT: f64 = 3.0;

/// Default weight for Text matches.
pub const TEXT_WEIGHT: f64 = 1.0;

/// Per-field score multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub title: f64,
    pub page: f64,
    pub text: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        FieldWeights {
            title: TITLE_WEIGHT,
            page: PAGE_WEIGHT,
            text: TEXT_WEIGHT,
        }
    }
}

impl FieldWeights {
    /// Weight for a field.
    pub fn weight(&self, field: FieldTag) -> f64 {
        match field {
            FieldTag::Title => self.title,
            FieldTag::Page => self.page,
            FieldTag::Text => self.text,
        }
    }

    /// Does the `Title > Page > Text` hierarchy hold?
    pub fn is_hierarchical(&self) -> bool {
        self.title > self.page && self.page > self.text
    }

    /// Score contribution of one posting.
    pub fn posting_score(&self, field: FieldTag, frequency: u32) -> f64 {
        self.weight(field) * f64::from(frequency)
    }
}
