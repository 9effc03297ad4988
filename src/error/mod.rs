//! Error types for the conversion engine and its front-ends

use thiserror::Error;

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Serialize(#[from] SerializeError),

    #[error("unsupported format '{0}'; expected csv, json or yaml")]
    UnsupportedFormat(String),
}

impl ConvertError {
    /// Message suitable for CLI stderr and HTTP error bodies
    pub fn user_message(&self) -> String {
        match self {
            Self::Parse(err) => format!("input could not be parsed: {err}"),
            Self::Shape(err) => format!("input has the wrong shape for a table: {err}"),
            Self::Serialize(err) => format!("output could not be written: {err}"),
            Self::UnsupportedFormat(_) => self.to_string(),
        }
    }
}

/// Malformed input text for the declared source format
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("csv parse error: {0}")]
    Tabular(#[from] csv::Error),

    #[error("json parse error: {0}")]
    Object(#[from] serde_json::Error),

    #[error("yaml parse error: {0}")]
    Markup(#[from] serde_yaml::Error),
}

/// Syntactically valid tree that cannot be reconciled into rows
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("root is {found}; expected an object or an array of objects")]
    UnsupportedRoot { found: &'static str },

    #[error("array element {index} is {found}; every element must be an object to form a row")]
    NonObjectElement { index: usize, found: &'static str },
}

/// Failure on the write side of an adapter
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("csv write error: {0}")]
    Tabular(String),

    #[error("json write error: {0}")]
    Object(#[from] serde_json::Error),

    #[error("yaml write error: {0}")]
    Markup(#[from] serde_yaml::Error),
}
