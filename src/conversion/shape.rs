//! Shape reconciliation between trees and row sets
//!
//! A row set is the flat special case of a tree: a list of maps with
//! scalar-or-absent values. Lowering a tree to rows only accepts an object
//! root (promoted to a single row) or an array whose every element is an
//! object; lifting rows to a tree always succeeds.

use serde_json::{Map, Value};

use crate::error::ShapeError;
use crate::formats::tabular::Row;

/// Lower a tree to rows.
///
/// An object root becomes a one-row set; an array root becomes one row per
/// element, each of which must be an object. Every other root shape fails.
pub fn tree_to_rows(tree: &Value) -> Result<Vec<Row>, ShapeError> {
    match tree {
        Value::Object(map) => Ok(vec![row_from_object(map)]),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(row_from_object(map)),
                other => Err(ShapeError::NonObjectElement {
                    index,
                    found: kind(other),
                }),
            })
            .collect(),
        other => Err(ShapeError::UnsupportedRoot { found: kind(other) }),
    }
}

/// Lift rows to a tree: a list of maps with text values.
pub fn rows_to_tree(rows: Vec<Row>) -> Value {
    Value::Array(
        rows.into_iter()
            .map(|row| {
                Value::Object(
                    row.into_iter()
                        .map(|(key, value)| (key, Value::String(value)))
                        .collect(),
                )
            })
            .collect(),
    )
}

fn row_from_object(map: &Map<String, Value>) -> Row {
    map.iter()
        .map(|(key, value)| (key.clone(), cell_text(value)))
        .collect()
}

/// Render a tree value into a tabular cell.
///
/// Null is the empty cell; scalars use their canonical text; nested
/// collections land as their compact object-notation text.
fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
