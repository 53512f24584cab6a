//! Instant search over generated documentation corpora.
//!
//! Documentation generators emit a flat list of records, one per page or
//! anchored section, each with a title, a page name, body text and a category.
//! This crate is the engine that turns that list into an in-memory inverted
//! index and answers ranked, search-as-you-type queries against it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   build/     │──▶│   store.rs   │──▶│  index/      │
//! │ (snapshot,   │   │(DocumentStore│   │(InvertedIndex│
//! │  records)    │   │  validation) │   │  postings)   │
//! └──────────────┘   └──────────────┘   └──────────────┘
//!                                              │
//!        query ──▶ query.rs ──▶ scoring/ ◀─────┘
//!                 (SearchTerm)  (rank, weights)
//!                                    │
//!                                    ▼
//!                               format.rs ──▶ ResultRecord
//!                               (snippets)
//! ```
//!
//! `tokenizer.rs` sits under all of it: the corpus and the query are cut
//! into tokens the same way.
//!
//! # Usage
//!
//! ```
//! use docsift::{build_index, search, Category, Record, SearchOptions};
//!
//! let records = vec![Record {
//!     location: "adding/".into(),
//!     page: "Adding a New Measure".into(),
//!     title: "Adding a New Measure".into(),
//!     text: "For example, Normal is declared as".into(),
//!     category: Category::Page,
//! }];
//! let index = build_index(records).unwrap();
//!
//! let results = search(&index, "norm", SearchOptions::default()).unwrap();
//! assert_eq!(results[0].location, "adding/");
//! assert_eq!(results[0].snippet.render("<b>", "</b>"),
//!            "For example, <b>Normal</b> is declared as");
//! ```

// Module declarations
pub mod build;
pub mod config;
pub mod error;
pub mod format;
pub mod index;
pub mod query;
pub mod scoring;
mod search;
pub mod store;
pub mod testing;
pub mod tokenizer;
mod types;
mod util;

// Re-exports for public API
pub use build::{parse_corpus, parse_records_json, parse_snapshot, read_corpus, CorpusError};
pub use config::{ConfigError, MatchMode, PrefixScope, SearchConfig, SnippetConfig};
pub use error::{InvariantError, SearchError, ValidationError, ValidationErrorKind};
pub use format::{extract_snippet, format_results, ResultRecord, Snippet};
pub use index::build_inverted_index;
#[cfg(feature = "parallel")]
pub use index::build_inverted_index_parallel;
pub use index::InvertedIndex;
pub use query::{parse_query, parse_query_with};
pub use scoring::ranking::{rank, rank_with_cancel, CancelToken, RankedDoc, TermMatch};
pub use scoring::FieldWeights;
pub use search::{build_index, build_index_with, search, SearchIndex};
pub use store::DocumentStore;
pub use tokenizer::{tokenize, tokenize_terms, Token, TokenStream};
pub use types::{Category, FieldTag, Posting, Record, SearchOptions, SearchTerm};
pub use util::normalize::fold_case;
