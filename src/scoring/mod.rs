// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A document's score is the sum, over every matched query term, of
//! `field_weight × frequency`. Title outweighs page name outweighs body text.
//! There is no length normalization.

mod core;
pub mod ranking;

pub use self::core::*;
