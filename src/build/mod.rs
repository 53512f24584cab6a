// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus ingestion.
//!
//! Two input shapes reach the engine:
//!
//! - **Strict records** (`document`): a JSON array of five-field records,
//!   validated exactly as the ingestion schema says.
//! - **Generator snapshots** (`snapshot`): the `search_index.js` file a
//!   documentation generator emits, with per-paragraph records and docstring
//!   categories that need folding before they fit the schema.
//!
//! [`read_corpus`] picks the right reader from the file content.

pub mod document;
pub mod snapshot;

use crate::error::ValidationError;
use crate::types::Record;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub use document::*;
pub use snapshot::*;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Parse corpus text, dispatching on its shape.
///
/// A leading `[` means a strict record array; anything else is treated as a
/// generator snapshot.
pub fn parse_corpus(content: &str) -> Result<Vec<Record>, ValidationError> {
    if content.trim_start().starts_with('[') {
        parse_records_json(content)
    } else {
        parse_snapshot(content)
    }
}

/// Read and parse a corpus file.
pub fn read_corpus(path: impl AsRef<Path>) -> Result<Vec<Record>, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let records = parse_corpus(&content)?;
    info!(path = %path.display(), records = records.len(), "corpus read");
    Ok(records)
}
