// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: the one place ranking policy lives.
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides:
//!
//! ```json
//! { "weights": { "title": 8.0 }, "matchMode": "any" }
//! ```

use crate::scoring::FieldWeights;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

/// How multiple query terms combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// A document must satisfy every term (AND).
    #[default]
    All,
    /// A document must satisfy at least one term (OR).
    Any,
}

/// Which query terms are expanded as prefixes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrefixScope {
    /// Only the last (in-progress) term.
    #[default]
    LastTerm,
    /// Every term.
    AllTerms,
    /// No prefix expansion at all.
    Off,
}

/// Snippet extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnippetConfig {
    /// Upper bound on snippet length in characters, ellipses excluded.
    pub max_chars: usize,
    /// Marker placed where the snippet cuts into the text.
    pub ellipsis: String,
}

impl Default for SnippetConfig {
    fn default() -> Self {
        SnippetConfig {
            max_chars: 160,
            ellipsis: "…".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub weights: FieldWeights,
    pub match_mode: MatchMode,
    pub prefix_scope: PrefixScope,
    pub snippet: SnippetConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("weight for {field} must be finite and >= 0, got {value}")]
    InvalidWeight { field: &'static str, value: f64 },

    #[error("snippet.maxChars must be > 0")]
    EmptySnippet,
}

impl SearchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject weights that would make scores meaningless.
    ///
    /// A non-hierarchical weighting is allowed but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.weights;
        for (field, value) in [("title", w.title), ("page", w.page), ("text", w.text)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { field, value });
            }
        }
        if self.snippet.max_chars == 0 {
            return Err(ConfigError::EmptySnippet);
        }
        if !w.is_hierarchical() {
            warn!(
                title = w.title,
                page = w.page,
                text = w.text,
                "field weights do not follow title > page > text"
            );
        }
        Ok(())
    }
}
