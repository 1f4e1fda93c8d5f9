//! Callable (function-literal) values
//!
//! A [`FnSource`] is a function value carried as parsed source text:
//! `function (a, b) { return a + b; }`. Brine never evaluates the body;
//! reconstruction means recovering the signature and body from the stored
//! literal, not producing an executable. Hosts that want to run the code do
//! so through their own interpreter, after asserting trust in the store
//! (see the trusted decode path in the codec).

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Anonymous function literal: signature, then a braced body that runs to
/// the end of the text.
static FUNCTION_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^function\s*\(([^)]*)\)\s*\{(.*)\}\s*$").unwrap());

/// A function value, represented by its source text
///
/// Equality compares the full source, so two literals that differ only in
/// whitespace are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FnSource {
    params: Vec<String>,
    body: String,
    source: String,
}

impl FnSource {
    /// Parse an anonymous function literal
    ///
    /// Returns `None` when the text does not have the
    /// `function (params) { body }` shape.
    pub fn parse(text: &str) -> Option<FnSource> {
        let caps = FUNCTION_LITERAL.captures(text)?;
        let params = caps[1]
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        Some(FnSource {
            params,
            body: caps[2].trim().to_string(),
            source: text.to_string(),
        })
    }

    /// Parameter names, in declaration order
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Number of declared parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Body text between the braces, trimmed
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The full literal as originally written; this is what gets persisted
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for FnSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let f = FnSource::parse("function (a, b) { return a + b; }").unwrap();
        assert_eq!(f.params(), ["a", "b"]);
        assert_eq!(f.arity(), 2);
        assert_eq!(f.body(), "return a + b;");
    }

    #[test]
    fn test_parse_no_params() {
        let f = FnSource::parse("function () { return 1; }").unwrap();
        assert!(f.params().is_empty());
        assert_eq!(f.arity(), 0);
    }

    #[test]
    fn test_parse_tight_spacing() {
        let f = FnSource::parse("function(x){return x*2;}").unwrap();
        assert_eq!(f.params(), ["x"]);
        assert_eq!(f.body(), "return x*2;");
    }

    #[test]
    fn test_parse_multiline_body() {
        let src = "function (n) {\n  var r = 1;\n  return r * n;\n}";
        let f = FnSource::parse(src).unwrap();
        assert_eq!(f.body(), "var r = 1;\n  return r * n;");
        assert_eq!(f.source(), src);
    }

    #[test]
    fn test_parse_nested_braces() {
        // Body brace matching is greedy to the final brace
        let f = FnSource::parse("function (x) { if (x) { return 1; } return 0; }").unwrap();
        assert_eq!(f.body(), "if (x) { return 1; } return 0;");
    }

    #[test]
    fn test_source_preserved_exactly() {
        let src = "function ( a ,b ) {  return a;  }";
        let f = FnSource::parse(src).unwrap();
        assert_eq!(f.source(), src);
        assert_eq!(f.params(), ["a", "b"]);
        assert_eq!(f.to_string(), src);
    }

    #[test]
    fn test_parse_rejects_named_function() {
        // Only anonymous literals have the stored shape
        assert!(FnSource::parse("function add(a, b) { return a + b; }").is_none());
    }

    #[test]
    fn test_parse_rejects_non_function() {
        assert!(FnSource::parse("hello").is_none());
        assert!(FnSource::parse("function (a)").is_none());
        assert!(FnSource::parse("(a) => a").is_none());
    }

    #[test]
    fn test_equality_is_source_equality() {
        let a = FnSource::parse("function (x) { return x; }").unwrap();
        let b = FnSource::parse("function (x) {return x;}").unwrap();
        assert_ne!(a, b);
        assert_eq!(a, FnSource::parse("function (x) { return x; }").unwrap());
    }
}
