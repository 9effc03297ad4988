//! Object-notation (JSON) adapter
//!
//! Strict parse and pretty/compact serialization of the shared tree shape.
//! `serde_json` is built with `preserve_order`, so object key order survives
//! a parse/serialize cycle.

use serde_json::Value;

use crate::error::{ParseError, SerializeError};

/// Parse object-notation text into a tree.
///
/// Strict: syntax errors, malformed escapes and trailing garbage all fail.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize a tree to object-notation text.
///
/// `pretty` emits 2-space indentation; otherwise the most compact valid
/// representation. Non-ASCII text is written unescaped either way.
pub fn serialize(tree: &Value, pretty: bool) -> Result<String, SerializeError> {
    let text = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    Ok(text)
}
