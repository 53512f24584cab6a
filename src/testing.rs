// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Category, Record};

/// Create a page record. The page name doubles as the title.
pub fn make_record(location: &str, title: &str, text: &str) -> Record {
    Record {
        location: location.to_string(),
        page: title.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        category: Category::Page,
    }
}

/// Create a section record within `page`.
pub fn make_section(location: &str, page: &str, title: &str, text: &str) -> Record {
    Record {
        location: location.to_string(),
        page: page.to_string(),
        title: title.to_string(),
        text: text.to_string(),
        category: Category::Section,
    }
}

/// A small corpus shaped like a generated measure-theory docs site.
///
/// Covers pages, sections, math glyphs and code snippets.
pub fn sample_corpus() -> Vec<Record> {
    vec![
        make_record(
            "intro/",
            "Introduction",
            "There are lots of packages for working with probability distributions. \
             But an improper prior is still a measure.",
        ),
        make_section(
            "adding/#Adding-a-New-Measure",
            "Adding a New Measure",
            "Adding a New Measure",
            "",
        ),
        make_section(
            "adding/#Parameterized-Measures",
            "Adding a New Measure",
            "Parameterized Measures",
            "",
        ),
        make_record(
            "adding/",
            "Adding a New Measure",
            "To start, declare a @parameterized. For example, Normal is declared as\n\n\
             @parameterized Normal(μ,σ) ≪ (1/sqrt2π) * Lebesgue(ℝ)\n\n\
             Let's look at another example, the Beta distribution. \
             Here the base measure is Lebesgue(𝕀)",
        ),
        make_section(
            "adding/#Random-Sampling",
            "Adding a New Measure",
            "Random Sampling",
            "",
        ),
        make_section(
            "#MeasureTheory.𝒹-Tuple{AbstractMeasure, AbstractMeasure}",
            "Home",
            "MeasureTheory.𝒹",
            "𝒹(μ::AbstractMeasure, base::AbstractMeasure; log=false)\n\n\
             Compute the Radom-Nikodym derivative of μ with respect to base.",
        ),
        make_section(
            "#MeasureTheory.∫-Tuple{Any, AbstractMeasure}",
            "Home",
            "MeasureTheory.∫",
            "∫(f, base::AbstractMeasure; log=false)\n\n\
             Define a new measure in terms of a density f over some base measure.",
        ),
    ]
}
