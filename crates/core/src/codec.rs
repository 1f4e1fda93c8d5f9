//! Pickle codec: typed values over a text-only channel
//!
//! Several incompatible textual representations (regex literals, function
//! literals, JSON, raw strings) share one string-valued store. The encoder
//! writes a discriminated envelope so that reads never have to guess:
//!
//! ```text
//! <tag> 0x1F <payload>
//! ```
//!
//! where 0x1F is the ASCII unit separator and the tag names the class:
//!
//! | tag  | classes                               | payload            |
//! |------|---------------------------------------|--------------------|
//! | `re` | Regex                                 | `/source/flags`    |
//! | `fn` | Function                              | function source    |
//! | `js` | Null, Bool, Int, Float, Array, Object | JSON text          |
//! | `tx` | String                                | the raw string     |
//!
//! ## Foreign text
//!
//! Text written through the raw store (no envelope) is classified
//! heuristically, in this exact priority, ties broken by order:
//! 1. regex-literal shape → `Regex`
//! 2. function-literal shape → `Function` (trusted) or opaque `String`
//! 3. JSON parse success → the parsed value
//! 4. anything else → the raw text as `String`
//!
//! A foreign string that happens to match one of the shapes is misclassified
//! on read; that ambiguity is inherent to untagged text and accepted. Values
//! written by [`encode`] never hit this path.
//!
//! ## Trust
//!
//! Untagged function-shaped text only becomes a `Function` value through the
//! explicitly invoked trusted mode: the caller asserts the store's contents
//! are its own. The default mode leaves such text opaque. Tagged `fn`
//! payloads decode in both modes: the envelope was produced by this codec
//! from an already-typed value, and a `FnSource` is inert source text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::callable::FnSource;
use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::value::Value;

/// Separator between the envelope tag and its payload (ASCII unit separator)
pub const TAG_SEPARATOR: char = '\u{1f}';

const TAG_REGEX: &str = "re";
const TAG_FUNCTION: &str = "fn";
const TAG_JSON: &str = "js";
const TAG_TEXT: &str = "tx";

/// Regex-literal shape: `/…/` plus 0-4 flag characters
static REGEX_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^/.*/[gimsuy]{0,4}$").unwrap());

/// Function-literal shape: `function (` … ending in `}`
static FUNCTION_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^function\s*\(.*\}\s*$").unwrap());

/// How to treat untagged function-shaped text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trust {
    /// Function-shaped foreign text stays an opaque `String`
    #[default]
    Untrusted,
    /// The caller vouches for the store; function-shaped text is parsed
    Trusted,
}

/// Encode a value for storage
///
/// Errors when the value cannot be carried: non-finite floats, or `Regex` /
/// `Function` values nested inside arrays or objects (the envelope tags a
/// whole value, not its parts).
pub fn encode(value: &Value) -> Result<String> {
    match value {
        Value::Regex(p) => Ok(envelope(TAG_REGEX, &p.literal())),
        Value::Function(f) => Ok(envelope(TAG_FUNCTION, f.source())),
        Value::String(s) => Ok(envelope(TAG_TEXT, s)),
        other => {
            let json = serde_json::to_string(&other.to_json()?)?;
            Ok(envelope(TAG_JSON, &json))
        }
    }
}

/// Decode stored text in the default (untrusted) mode
pub fn decode(text: &str) -> Result<Value> {
    decode_with(text, Trust::Untrusted)
}

/// Decode stored text, trusting function-shaped foreign text
pub fn decode_trusted(text: &str) -> Result<Value> {
    decode_with(text, Trust::Trusted)
}

/// Decode stored text with an explicit trust mode
pub fn decode_with(text: &str, trust: Trust) -> Result<Value> {
    match split_envelope(text) {
        Some((TAG_REGEX, payload)) => Pattern::parse(payload)
            .map(Value::Regex)
            .ok_or_else(|| Error::corruption(format!("bad pattern payload {payload:?}"))),
        Some((TAG_FUNCTION, payload)) => FnSource::parse(payload)
            .map(Value::Function)
            .ok_or_else(|| Error::corruption(format!("bad function payload {payload:?}"))),
        Some((TAG_JSON, payload)) => {
            let json: serde_json::Value = serde_json::from_str(payload)
                .map_err(|e| Error::corruption(format!("bad JSON payload: {e}")))?;
            Ok(Value::from_json(json))
        }
        Some((TAG_TEXT, payload)) => Ok(Value::String(payload.to_string())),
        Some(_) | None => Ok(classify_foreign(text, trust)),
    }
}

fn envelope(tag: &str, payload: &str) -> String {
    let mut out = String::with_capacity(tag.len() + 1 + payload.len());
    out.push_str(tag);
    out.push(TAG_SEPARATOR);
    out.push_str(payload);
    out
}

/// Split `tag 0x1F payload`, returning `None` for untagged text
fn split_envelope(text: &str) -> Option<(&str, &str)> {
    let (tag, payload) = text.split_once(TAG_SEPARATOR)?;
    match tag {
        TAG_REGEX | TAG_FUNCTION | TAG_JSON | TAG_TEXT => Some((tag, payload)),
        _ => None,
    }
}

/// Heuristic classification of untagged foreign text
fn classify_foreign(text: &str, trust: Trust) -> Value {
    if REGEX_SHAPE.is_match(text) {
        if let Some(p) = Pattern::parse(text) {
            return Value::Regex(p);
        }
    }
    if FUNCTION_SHAPE.is_match(text) {
        match trust {
            Trust::Trusted => {
                if let Some(f) = FnSource::parse(text) {
                    return Value::Function(f);
                }
            }
            Trust::Untrusted => return Value::String(text.to_string()),
        }
    }
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(text) {
        return Value::from_json(json);
    }
    Value::String(text.to_string())
}
