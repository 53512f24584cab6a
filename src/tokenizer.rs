// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning text into tokens.
//!
//! Every string that enters the engine goes through here: record titles, page
//! names, body text, and the query itself. Index-time and query-time
//! tokenization MUST agree, otherwise a query can never reach the postings it
//! was meant for.
//!
//! # Rules (applied in order)
//!
//! 1. NFC-normalize the input
//! 2. Split on whitespace and ASCII punctuation
//! 3. Emit each math/Unicode symbol glyph (`≪`, `∫`, `ℝ`, `𝒹`) as its own token
//! 4. Case-fold each token (full Unicode folding, so `ß` matches `ss`)
//!
//! No stemming and no stop words. `"The"` is a token, and so is `"a"`.
//!
//! # Spans and positions
//!
//! Each [`Token`] remembers its byte span in the *normalized* source and its
//! ordinal position in the stream. Positions are what the index stores;
//! spans are what the snippet extractor uses to cut text on token edges.

use crate::util::normalize::{classify, fold_case, is_combining_mark, normalize, CharClass};
use std::ops::Range;

/// A single normalized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Case-folded token text.
    pub text: String,
    /// Byte range of the token in [`TokenStream::source`].
    pub span: Range<usize>,
    /// Ordinal of the token within its stream (0-based).
    pub position: usize,
}

/// A restartable, lazily tokenized string.
///
/// Holds the normalized source; every call to [`TokenStream::iter`] starts a
/// fresh pass over it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    source: String,
}

impl TokenStream {
    pub fn new(text: &str) -> Self {
        TokenStream {
            source: normalize(text),
        }
    }

    /// The NFC-normalized text the spans refer to.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Start a new pass over the tokens.
    pub fn iter(&self) -> Tokens<'_> {
        Tokens {
            source: &self.source,
            cursor: 0,
            position: 0,
        }
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = Token;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the tokens of a [`TokenStream`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    cursor: usize,
    position: usize,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let rest = &self.source[self.cursor..];
        let mut chars = rest.char_indices().peekable();

        // Skip separators (and stray combining marks with nothing to attach to)
        let (start, first) = loop {
            let (i, c) = chars.next()?;
            if is_combining_mark(c) || classify(c) == CharClass::Separator {
                continue;
            }
            break (i, c);
        };

        let mut end = start + first.len_utf8();
        let first_class = classify(first);

        while let Some(&(i, c)) = chars.peek() {
            let joins = is_combining_mark(c)
                || (first_class == CharClass::Word && classify(c) == CharClass::Word);
            if !joins {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }

        let span = (self.cursor + start)..(self.cursor + end);
        self.cursor += end;

        let token = Token {
            text: fold_case(&self.source[span.clone()]),
            span,
            position: self.position,
        };
        self.position += 1;
        Some(token)
    }
}

/// Tokenize a string.
///
/// ```
/// use docsift::tokenize;
///
/// let terms: Vec<String> = tokenize("Normal(μ,σ) ≪ Lebesgue(ℝ)")
///     .iter()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(terms, ["normal", "μ", "σ", "≪", "lebesgue", "ℝ"]);
/// ```
pub fn tokenize(text: &str) -> TokenStream {
    TokenStream::new(text)
}

/// Tokenize a string and keep only the token texts.
pub fn tokenize_terms(text: &str) -> Vec<String> {
    tokenize(text).iter().map(|t| t.text).collect()
}
