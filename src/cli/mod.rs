// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Two subcommands: `query` to search a corpus file and print ranked results,
//! and `inspect` to summarize the index a corpus produces. Both build the
//! index in memory from the corpus on every run; there is no index file.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Instant search over documentation search corpora",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display ranked results
    Query {
        /// Corpus file: a generator snapshot (search_index.js) or a JSON array of records
        corpus: PathBuf,

        /// Search query (the last word matches as a prefix)
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10", allow_negative_numbers = true)]
        limit: i64,

        /// Number of results to skip
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        offset: i64,

        /// JSON search configuration (weights, match mode, snippet size)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Summarize the index built from a corpus
    Inspect {
        /// Corpus file
        corpus: PathBuf,

        /// Number of most frequent terms to list
        #[arg(long, default_value = "10")]
        top: usize,
    },
}
