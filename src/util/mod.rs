// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character-level helpers shared by the tokenizer and the snippet extractor.

pub mod normalize;
