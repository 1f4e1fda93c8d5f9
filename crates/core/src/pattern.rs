//! Regular-expression pattern values
//!
//! A [`Pattern`] carries the source text and flags of a regex literal
//! (`/ab+c/gi`). The literal form is what gets persisted; flag order is
//! preserved exactly so that a stored pattern round-trips byte for byte.
//!
//! Flags follow the literal convention: `i`/`m`/`s` change matching and map
//! to the engine's inline flags on [`Pattern::compile`]; `g`/`u`/`y` affect
//! only how a host dispatches matches and are carried as metadata.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Flag characters a pattern may carry, in canonical order
pub const PATTERN_FLAGS: &str = "gimsuy";

/// Strict literal form: `/source/flags`. The lazy source group lets
/// interior `/` characters belong to the source as long as the remainder
/// still parses as a flag suffix.
static PATTERN_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^/(.*?)/([a-zA-Z]*)$").unwrap());

/// A regular-expression pattern value
///
/// Stores the pattern source and flags exactly as written. Structural
/// equality compares both, so `/a/gi` and `/a/ig` are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    source: String,
    flags: String,
}

impl Pattern {
    /// Create a pattern, validating the flag string
    ///
    /// Each flag must be one of `gimsuy` and may appear at most once.
    /// The original flag order is preserved.
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let flags = flags.into();
        let mut seen = [false; 6];
        for c in flags.chars() {
            let idx = PATTERN_FLAGS
                .find(c)
                .ok_or_else(|| Error::invalid_argument(format!("unknown pattern flag '{c}'")))?;
            if seen[idx] {
                return Err(Error::invalid_argument(format!(
                    "duplicate pattern flag '{c}'"
                )));
            }
            seen[idx] = true;
        }
        Ok(Pattern { source, flags })
    }

    /// Parse a `/source/flags` literal
    ///
    /// Returns `None` when the text is not a well-formed literal or the
    /// flag suffix is invalid.
    pub fn parse(text: &str) -> Option<Pattern> {
        let caps = PATTERN_LITERAL.captures(text)?;
        Pattern::new(&caps[1], &caps[2]).ok()
    }

    /// Pattern source text (the part between the slashes)
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flag characters in their original order
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// True if the pattern carries the given flag
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// The persisted literal form, `/source/flags`
    pub fn literal(&self) -> String {
        format!("/{}/{}", self.source, self.flags)
    }

    /// Compile to an engine regex
    ///
    /// Matching flags translate to inline groups: `i` → `(?i)`, `m` → `(?m)`,
    /// `s` → `(?s)`. Dispatch flags (`g`, `u`, `y`) do not alter compilation.
    pub fn compile(&self) -> Result<Regex> {
        let inline: String = self
            .flags
            .chars()
            .filter(|c| matches!(c, 'i' | 'm' | 's'))
            .collect();
        let full = if inline.is_empty() {
            self.source.clone()
        } else {
            format!("(?{}){}", inline, self.source)
        };
        Regex::new(&full)
            .map_err(|e| Error::invalid_argument(format!("uncompilable pattern: {e}")))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ====================================================================
    // Construction and validation
    // ====================================================================

    #[test]
    fn test_new_plain() {
        let p = Pattern::new("ab+c", "").unwrap();
        assert_eq!(p.source(), "ab+c");
        assert_eq!(p.flags(), "");
    }

    #[test]
    fn test_new_with_flags() {
        let p = Pattern::new("foo", "gi").unwrap();
        assert_eq!(p.flags(), "gi");
        assert!(p.has_flag('g'));
        assert!(p.has_flag('i'));
        assert!(!p.has_flag('m'));
    }

    #[test]
    fn test_new_preserves_flag_order() {
        let p = Pattern::new("x", "ig").unwrap();
        assert_eq!(p.flags(), "ig");
        assert_ne!(p, Pattern::new("x", "gi").unwrap());
    }

    #[test]
    fn test_new_rejects_unknown_flag() {
        let err = Pattern::new("x", "z").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_new_rejects_duplicate_flag() {
        let err = Pattern::new("x", "gg").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    // ====================================================================
    // Literal round-trip
    // ====================================================================

    #[test]
    fn test_literal() {
        let p = Pattern::new("ab+c", "gi").unwrap();
        assert_eq!(p.literal(), "/ab+c/gi");
        assert_eq!(p.to_string(), "/ab+c/gi");
    }

    #[test]
    fn test_parse_literal() {
        let p = Pattern::parse("/ab+c/gi").unwrap();
        assert_eq!(p.source(), "ab+c");
        assert_eq!(p.flags(), "gi");
    }

    #[test]
    fn test_parse_no_flags() {
        let p = Pattern::parse("/foo/").unwrap();
        assert_eq!(p.source(), "foo");
        assert_eq!(p.flags(), "");
    }

    #[test]
    fn test_parse_interior_slash() {
        // Interior slashes stay in the source
        let p = Pattern::parse("/a/b/i").unwrap();
        assert_eq!(p.source(), "a/b");
        assert_eq!(p.flags(), "i");
    }

    #[test]
    fn test_parse_roundtrip() {
        for literal in ["/foo/i", "/a|b/", "/^x$/m", "/a/b/c/gi"] {
            let p = Pattern::parse(literal).unwrap();
            assert_eq!(p.literal(), literal);
        }
    }

    #[test]
    fn test_parse_rejects_non_literal() {
        assert!(Pattern::parse("foo").is_none());
        assert!(Pattern::parse("/unterminated").is_none());
        assert!(Pattern::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_flags() {
        assert!(Pattern::parse("/x/zz").is_none());
        assert!(Pattern::parse("/x/gg").is_none());
    }

    // ====================================================================
    // Compilation
    // ====================================================================

    #[test]
    fn test_compile_plain() {
        let re = Pattern::new("ab+c", "").unwrap().compile().unwrap();
        assert!(re.is_match("abbbc"));
        assert!(!re.is_match("ac"));
    }

    #[test]
    fn test_compile_case_insensitive() {
        let re = Pattern::new("foo", "i").unwrap().compile().unwrap();
        assert!(re.is_match("FOO"));
    }

    #[test]
    fn test_compile_multiline() {
        let re = Pattern::new("^b", "m").unwrap().compile().unwrap();
        assert!(re.is_match("a\nb"));
    }

    #[test]
    fn test_compile_dispatch_flags_ignored() {
        // g and y do not change the compiled expression
        let re = Pattern::new("foo", "gy").unwrap().compile().unwrap();
        assert!(re.is_match("foo"));
        assert!(!re.is_match("FOO"));
    }

    #[test]
    fn test_compile_invalid_source() {
        let err = Pattern::new("(unclosed", "").unwrap().compile().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
