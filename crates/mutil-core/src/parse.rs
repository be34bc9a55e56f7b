//! # Parsing into Maybe
//!
//! `FromStr` reports failure through `Result`; callers that only care
//! whether a value came out want a [`Maybe`] instead. These helpers trim
//! surrounding whitespace and return an empty `Maybe` for absent input or
//! any parse failure. The parse error itself is discarded.

use std::str::FromStr;

use crate::maybe::Maybe;

/// Parse `text` as a `T`, or return an empty `Maybe`.
pub fn parse_maybe<T: FromStr>(text: Option<&str>) -> Maybe<T> {
    text.and_then(|s| s.trim().parse().ok()).into()
}

/// Parse a 16-bit signed integer.
pub fn parse_i16(text: Option<&str>) -> Maybe<i16> {
    parse_maybe(text)
}

/// Parse a 32-bit signed integer.
pub fn parse_i32(text: Option<&str>) -> Maybe<i32> {
    parse_maybe(text)
}

/// Parse a 64-bit signed integer.
pub fn parse_i64(text: Option<&str>) -> Maybe<i64> {
    parse_maybe(text)
}

/// Parse a single-precision float.
pub fn parse_f32(text: Option<&str>) -> Maybe<f32> {
    parse_maybe(text)
}

/// Parse a double-precision float.
pub fn parse_f64(text: Option<&str>) -> Maybe<f64> {
    parse_maybe(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_integers() {
        assert_eq!(parse_i16(Some("-12")), Maybe::of(-12));
        assert_eq!(parse_i32(Some("42")), Maybe::of(42));
        assert_eq!(parse_i64(Some("+9000000000")), Maybe::of(9_000_000_000));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_i32(Some("  7\n")), Maybe::of(7));
    }

    #[test]
    fn test_parse_absent_input_is_empty() {
        assert!(parse_i32(None).is_empty());
    }

    #[test]
    fn test_parse_garbage_is_empty() {
        assert!(parse_i32(Some("forty-two")).is_empty());
        assert!(parse_i32(Some("")).is_empty());
    }

    #[test]
    fn test_parse_out_of_range_is_empty() {
        assert!(parse_i16(Some("40000")).is_empty());
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse_f64(Some("2.5")), Maybe::of(2.5));
        assert_eq!(parse_f32(Some("-0.25")), Maybe::of(-0.25_f32));
        assert!(parse_f64(Some("2.5.1")).is_empty());
    }

    #[test]
    fn test_parse_generic_target() {
        let maybe: Maybe<u8> = parse_maybe(Some("255"));
        assert_eq!(maybe, Maybe::of(255));
        let maybe: Maybe<bool> = parse_maybe(Some("true"));
        assert_eq!(maybe, Maybe::of(true));
    }
}
