// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading generated documentation search snapshots.
//!
//! Documentation generators ship the corpus as a JavaScript file:
//!
//! ```text
//! var documenterSearchIndex = {"docs":
//! [{"location":"intro/","page":"Introduction", ... ,"category":"page"}, ...]
//! }
//! ```
//!
//! Three quirks separate that file from the strict ingestion schema:
//!
//! 1. **One record per paragraph.** A page with twelve paragraphs produces
//!    twelve records with the same `location`. [`coalesce_paragraphs`] folds
//!    them back into one record per location.
//! 2. **Docstring categories.** API reference entries are tagged `"function"`,
//!    `"macro"`, `"type"`, ... They are anchored fragments of a page, so they
//!    map to [`Category::Section`].
//! 3. **Empty root location.** The site's home page is `""`. It maps to
//!    `"./"`, which is what an empty relative link resolves to.

use super::document::RawRecord;
use crate::error::ValidationError;
use crate::types::{Category, Record};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// Location used for the site root.
pub const ROOT_LOCATION: &str = "./";

/// Separator placed between coalesced paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotPayload {
    Wrapped { docs: Vec<RawRecord> },
    Bare(Vec<RawRecord>),
}

/// Strip the `var name =` assignment and trailing `;` around the JSON.
fn json_body(source: &str) -> Result<&str, ValidationError> {
    let start = source
        .find(['{', '['])
        .ok_or_else(|| ValidationError::malformed("no JSON object or array in snapshot"))?;
    let body = source[start..].trim_end();
    Ok(body.strip_suffix(';').unwrap_or(body).trim_end())
}

/// Map a generator category tag to a [`Category`].
fn snapshot_category(location: &str, tag: &str) -> Result<Category, ValidationError> {
    if let Some(category) = Category::from_tag(tag) {
        return Ok(category);
    }
    if tag.trim().is_empty() {
        return Err(ValidationError::unknown_category(location, tag));
    }
    debug!(location, category = tag, "docstring category mapped to section");
    Ok(Category::Section)
}

/// Parse a snapshot file into records, one per location.
pub fn parse_snapshot(source: &str) -> Result<Vec<Record>, ValidationError> {
    let body = json_body(source)?;
    let payload: SnapshotPayload =
        serde_json::from_str(body).map_err(|e| ValidationError::malformed(e.to_string()))?;
    let raw = match payload {
        SnapshotPayload::Wrapped { docs } => docs,
        SnapshotPayload::Bare(docs) => docs,
    };

    let paragraphs = raw
        .into_iter()
        .map(|mut record| {
            if record.location.as_deref() == Some("") {
                record.location = Some(ROOT_LOCATION.to_string());
            }
            record.into_record_with(snapshot_category)
        })
        .collect::<Result<Vec<Record>, ValidationError>>()?;

    Ok(coalesce_paragraphs(paragraphs))
}

/// Fold paragraph records sharing a location into one record.
///
/// Records merge only when `page`, `title` and `category` also agree; the
/// merged record sits where the first paragraph was. Non-empty texts are
/// joined with [`PARAGRAPH_SEPARATOR`] in input order. Records that share a
/// location but disagree on the rest are kept separate, so loading them
/// still reports the duplicate.
pub fn coalesce_paragraphs(records: Vec<Record>) -> Vec<Record> {
    let input = records.len();
    let mut out: Vec<Record> = Vec::with_capacity(input);
    let mut first: HashMap<String, usize> = HashMap::new();

    for record in records {
        if let Some(&idx) = first.get(&record.location) {
            let target = &mut out[idx];
            if target.page == record.page
                && target.title == record.title
                && target.category == record.category
            {
                if !record.text.is_empty() {
                    if !target.text.is_empty() {
                        target.text.push_str(PARAGRAPH_SEPARATOR);
                    }
                    target.text.push_str(&record.text);
                }
                continue;
            }
        } else {
            first.insert(record.location.clone(), out.len());
        }
        out.push(record);
    }

    if out.len() < input {
        info!(paragraphs = input, records = out.len(), "coalesced snapshot paragraphs");
    }
    out
}
