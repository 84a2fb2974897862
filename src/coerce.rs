//! Text-to-scalar coercion and scalar-to-text rendering.
//!
//! The decode direction receives value text already trimmed of surrounding
//! whitespace by the line parser; whitespace inside the value is preserved.
//! Numeric parsing is locale-invariant base-10. The encode direction renders
//! booleans as `True`/`False` and numbers through `Display`, which for `f64`
//! is the shortest decimal form that round-trips and never uses exponent
//! notation.
//!
//! Decimal values do not pass through here: they travel over serde's string
//! channel, and `rust_decimal` parses and renders them itself.

use crate::error::{Error, Result};
use crate::kind::ScalarKind;
use std::str::FromStr;

/// Parses a boolean literal. `True`/`False` are the rendered forms, but any
/// ASCII casing is accepted on decode.
pub(crate) fn parse_bool(text: &str) -> Result<bool> {
    if text.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if text.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::coercion(text, ScalarKind::Bool))
    }
}

/// Parses a numeric scalar via its `FromStr` grammar. Overflow and malformed
/// digits both surface as a coercion failure carrying the offending text.
pub(crate) fn parse_number<T: FromStr>(text: &str, kind: ScalarKind) -> Result<T> {
    text.parse().map_err(|_| Error::coercion(text, kind))
}

/// Parses a character field: exactly one character after trimming.
pub(crate) fn parse_char(text: &str) -> Result<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(Error::coercion(text, ScalarKind::Char)),
    }
}

/// Renders a boolean in the format's canonical casing.
pub(crate) fn render_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}
