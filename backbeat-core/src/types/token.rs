//! Whitespace-delimited token sequence codec.
//!
//! Stored presets keep voicings, stickings, and phrase groupings as plain
//! text like `"S S K S"` or `"4 4 4 4"`. This module converts between that
//! text and ordered token vectors. `format(parse(t))` normalizes whitespace;
//! `parse(format(s)) == s` for any sequence whose tokens carry no internal
//! whitespace.

use crate::error::EngineError;
use std::fmt;

/// Split `text` on runs of whitespace into ordered string tokens.
///
/// Empty tokens are discarded, so blank or whitespace-only text yields an
/// empty sequence rather than an error.
pub fn parse(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Split `text` into an ordered integer sequence (phrase groupings).
pub fn parse_counts(text: &str) -> Result<Vec<u32>, EngineError> {
    text.split_whitespace()
        .map(|tok| {
            tok.parse::<u32>()
                .map_err(|_| EngineError::Format(format!("'{}' is not a note count", tok)))
        })
        .collect()
}

/// Join tokens with single spaces.
pub fn format<T: fmt::Display>(tokens: &[T]) -> String {
    tokens
        .iter()
        .map(|tok| tok.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_whitespace_runs() {
        assert_eq!(parse("S S K S"), vec!["S", "S", "K", "S"]);
        assert_eq!(parse("  R\tL \n R  R "), vec!["R", "L", "R", "R"]);
        assert_eq!(parse(""), Vec::<String>::new());
        assert_eq!(parse("   "), Vec::<String>::new());
    }

    #[test]
    fn test_parse_counts() {
        assert_eq!(parse_counts("4 4 4 4").unwrap(), vec![4, 4, 4, 4]);
        assert_eq!(parse_counts("").unwrap(), Vec::<u32>::new());
        assert!(parse_counts("4 four").is_err());
        assert!(parse_counts("-1 2").is_err());
    }

    #[test]
    fn test_format_joins_with_single_spaces() {
        assert_eq!(format(&["S", "K"]), "S K");
        assert_eq!(format(&[3u32, 3, 2]), "3 3 2");
        assert_eq!(format::<&str>(&[]), "");
    }

    #[test]
    fn test_roundtrip() {
        let tokens = vec!["S".to_string(), "K".to_string(), "H".to_string()];
        assert_eq!(parse(&format(&tokens)), tokens);
        assert_eq!(format(&parse("S   K\tH")), "S K H");
    }
}
