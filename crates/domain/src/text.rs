//! Text normalization for place-name comparison
//!
//! Operators type neighborhoods and school names by hand, with or without
//! accents and in any case. Every comparison in the route matchers and the
//! school directory goes through [`normalize_text`] so that "São Paulo",
//! "sao paulo" and "SAO PAULO" compare equal.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical comparison key for free text
///
/// Lower-cases, decomposes to NFD, drops combining marks and trims
/// surrounding whitespace. Total and deterministic; empty input yields an
/// empty string.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    stripped.trim().to_string()
}
