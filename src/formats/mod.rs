//! Format adapters: one reader/writer pair per supported text format
//!
//! Each adapter converts between text and the shared in-memory shapes: the
//! tabular adapter produces ordered rows of text cells, the object-notation
//! and markup adapters produce a [`serde_json::Value`] tree whose map keys
//! keep insertion order.

pub mod markup;
pub mod object;
pub mod tabular;

use crate::error::ConvertError;
use std::fmt;

/// The three formats the engine converts between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Delimited tabular text with a header row
    Csv,
    /// Object notation (JSON)
    Json,
    /// Indentation-based hierarchical markup (YAML)
    Yaml,
}

impl Format {
    /// Resolve a user-supplied format name.
    ///
    /// Accepts the concrete names (`csv`, `json`, `yaml`/`yml`) and the
    /// generic ones (`tabular`, `object`, `markup`), case-insensitively.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        match name.trim().to_lowercase().as_str() {
            "csv" | "tabular" => Ok(Format::Csv),
            "json" | "object" => Ok(Format::Json),
            "yaml" | "yml" | "markup" => Ok(Format::Yaml),
            other => Err(ConvertError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Conventional file extension for the format
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
