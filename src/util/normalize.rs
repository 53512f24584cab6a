// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unicode normalization and character classification.
//!
//! Documentation corpora for numerical libraries are full of math glyphs:
//! `≪`, `∫`, `ℝ`, `𝒹`, `𝕀`. Compatibility normalization (NFKC) would flatten
//! `ℝ` to `R` and `𝒹` to `d`, which destroys exactly the vocabulary users
//! search for. We use canonical composition (NFC) instead: it only merges
//! base letters with combining marks and leaves the glyphs alone.
//!
//! # Character classes
//!
//! | Class       | Examples                         | Tokenizer treatment          |
//! |-------------|----------------------------------|------------------------------|
//! | `Word`      | `a`, `Z`, `7`, `_`, `é`, `μ`     | Extends the current word     |
//! | `Symbol`    | `≪`, `∫`, `ℝ`, `𝒹`, `₂`, `ᵀ`    | One atomic token per glyph   |
//! | `Separator` | whitespace, ASCII punctuation    | Ends the current token       |
//!
//! Combining marks that survive NFC (no precomposed form exists) stick to
//! whatever precedes them.
//!
//! # Case
//!
//! Tokens are compared after full Unicode case folding, not lowercasing.
//! Lowercasing is context-sensitive (`"ΣΣ"` lowercases to `"σς"`) and keeps
//! `ß` distinct from `ss`; folding maps both spellings to one key.

use unicode_normalization::UnicodeNormalization;

/// How the tokenizer treats a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Word,
    Symbol,
    Separator,
}

/// Canonically compose a string (NFC).
pub fn normalize(value: &str) -> String {
    value.nfc().collect()
}

/// Full Unicode case folding, recomposed to NFC.
///
/// ```
/// use docsift::fold_case;
///
/// assert_eq!(fold_case("Straße"), fold_case("STRASSE"));
/// assert_eq!(fold_case("ΣΣ"), "σσ");
/// ```
pub fn fold_case(value: &str) -> String {
    normalize(&caseless::default_case_fold_str(value))
}

/// Classify a character for tokenization.
pub fn classify(c: char) -> CharClass {
    if c.is_ascii() {
        return if c.is_ascii_alphanumeric() || c == '_' {
            CharClass::Word
        } else {
            CharClass::Separator
        };
    }
    if c.is_whitespace() || is_general_punctuation(c) {
        return CharClass::Separator;
    }
    if is_math_letterlike(c) || is_script_form(c) {
        return CharClass::Symbol;
    }
    if c.is_alphanumeric() {
        CharClass::Word
    } else {
        CharClass::Symbol
    }
}

/// Check if a character is a combining mark (diacritic).
///
/// After NFC most accents are folded into their base letter. The ones left
/// over (e.g. a combining overline on a symbol) belong to the preceding glyph.
pub fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE00}'..='\u{FE0F}' |  // Variation Selectors
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Letterlike and mathematical alphanumeric glyphs: `ℝ`, `ℕ`, `𝕀`, `𝒹`.
fn is_math_letterlike(c: char) -> bool {
    matches!(c,
        '\u{2100}'..='\u{214F}' |   // Letterlike Symbols
        '\u{1D400}'..='\u{1D7FF}'   // Mathematical Alphanumeric Symbols
    )
}

/// Superscript and subscript forms: `²`, `₂`, `ᵀ`, `ₖ`.
fn is_script_form(c: char) -> bool {
    matches!(c,
        '\u{00B2}' | '\u{00B3}' | '\u{00B9}' |
        '\u{1D2C}'..='\u{1D6A}' |   // Modifier letters (superscript Latin/Greek)
        '\u{2070}'..='\u{209F}'     // Superscripts and Subscripts
    )
}

/// Typographic punctuation that should split words like ASCII punctuation does.
fn is_general_punctuation(c: char) -> bool {
    matches!(c,
        '\u{00A0}' |                // No-break space
        '\u{00AB}' | '\u{00BB}' |   // Guillemets
        '\u{2000}'..='\u{206F}' |   // General Punctuation (dashes, quotes, ellipsis)
        '\u{3000}'..='\u{303F}'     // CJK Symbols and Punctuation
    )
}
