//! Hierarchical-markup (YAML) adapter
//!
//! Bridges YAML documents and the shared tree shape. Scalar type inference
//! (numbers, booleans, null) is the markup format's own convention and
//! happens here and only here; everything downstream sees typed tree nodes.
//! Only plain scalar and collection types are produced: tagged values are
//! unwrapped to their inner value, never interpreted.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ParseError, SerializeError};

/// Parse markup text into a tree.
///
/// A multi-document stream is valid input; only the first document is used
/// and the rest are discarded without error. Empty input is the null tree.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    let mut documents = serde_yaml::Deserializer::from_str(text);
    match documents.next() {
        Some(document) => {
            let value = serde_yaml::Value::deserialize(document).map_err(ParseError::Markup)?;
            Ok(from_yaml(value))
        }
        None => Ok(Value::Null),
    }
}

/// Serialize a tree to block-style markup, preserving key order.
pub fn serialize(tree: &Value) -> Result<String, SerializeError> {
    let text = serde_yaml::to_string(&to_yaml(tree))?;
    Ok(text)
}

/// Lower a parsed YAML value into the shared tree shape.
///
/// Mapping keys that are numbers or booleans are stringified; other
/// non-string keys are dropped. Floats outside the tree's numeric range
/// (NaN, infinities) become null.
fn from_yaml(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            } else {
                Value::Null
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(from_yaml).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let entries = map
                .into_iter()
                .filter_map(|(k, v)| {
                    let key = match k {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        _ => return None,
                    };
                    Some((key, from_yaml(v)))
                })
                .collect();
            Value::Object(entries)
        }
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value),
    }
}

/// Lift the shared tree shape into a YAML value for emission.
fn to_yaml(tree: &Value) -> serde_yaml::Value {
    match tree {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                serde_yaml::Value::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                serde_yaml::Value::Number(u.into())
            } else {
                serde_yaml::Value::Number(n.as_f64().unwrap_or(0.0).into())
            }
        }
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Array(items) => {
            serde_yaml::Value::Sequence(items.iter().map(to_yaml).collect())
        }
        Value::Object(map) => {
            let mut mapping = serde_yaml::Mapping::with_capacity(map.len());
            for (key, value) in map {
                mapping.insert(serde_yaml::Value::String(key.clone()), to_yaml(value));
            }
            serde_yaml::Value::Mapping(mapping)
        }
    }
}
