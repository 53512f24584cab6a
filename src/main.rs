// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use docsift::{build_index_with, read_corpus, SearchConfig, SearchOptions};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Query {
            corpus,
            query,
            limit,
            offset,
            config,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let records = read_corpus(&corpus)?;
            let index = build_index_with(records, config)
                .with_context(|| format!("building index from {}", corpus.display()))?;

            let opts = SearchOptions::from_signed(Some(limit), offset)?;
            let results = index.search(&query, opts)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                display::print_results(&results, opts.offset);
            }
        }
        Commands::Inspect { corpus, top } => {
            let records = read_corpus(&corpus)?;
            let index = build_index_with(records, SearchConfig::default())
                .with_context(|| format!("building index from {}", corpus.display()))?;
            display::print_inspect(index.store().len(), index.inverted(), top);
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DOCSIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
