//! Core conversion engine: the pairwise transform matrix
//!
//! Each conversion composes two adapter calls, with a shape-reconciliation
//! step whenever the source and destination shapes differ (tree vs rows).
//! The engine is a pure function of its input: no caches, no locks, no
//! state between calls.

use crate::conversion::config::ConversionConfig;
use crate::conversion::shape;
use crate::error::ConvertResult;
use crate::formats::{markup, object, tabular, Format};

/// A single conversion call
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub from: Format,
    pub to: Format,
    pub content: String,
}

impl ConversionRequest {
    pub fn new(from: Format, to: Format, content: impl Into<String>) -> Self {
        Self {
            from,
            to,
            content: content.into(),
        }
    }
}

/// Stateless conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Run one conversion.
    ///
    /// Identity conversions return the input text untouched, without a
    /// parse or validation step; invalid text passes through unchanged.
    pub fn convert(&self, from: Format, to: Format, input: &str) -> ConvertResult<String> {
        let delimiter = self.config.delimiter;
        log::debug!("converting {from} -> {to} ({} bytes)", input.len());

        match (from, to) {
            (Format::Csv, Format::Csv)
            | (Format::Json, Format::Json)
            | (Format::Yaml, Format::Yaml) => Ok(input.to_string()),

            (Format::Csv, Format::Json) => {
                let rows = tabular::parse(input, delimiter)?;
                Ok(object::serialize(&shape::rows_to_tree(rows), self.config.pretty)?)
            }
            (Format::Csv, Format::Yaml) => {
                let rows = tabular::parse(input, delimiter)?;
                Ok(markup::serialize(&shape::rows_to_tree(rows))?)
            }
            (Format::Json, Format::Csv) => {
                let tree = object::parse(input)?;
                let rows = shape::tree_to_rows(&tree)?;
                Ok(tabular::serialize(&rows, delimiter)?)
            }
            (Format::Yaml, Format::Csv) => {
                let tree = markup::parse(input)?;
                let rows = shape::tree_to_rows(&tree)?;
                Ok(tabular::serialize(&rows, delimiter)?)
            }
            (Format::Json, Format::Yaml) => {
                let tree = object::parse(input)?;
                Ok(markup::serialize(&tree)?)
            }
            (Format::Yaml, Format::Json) => {
                let tree = markup::parse(input)?;
                Ok(object::serialize(&tree, self.config.pretty)?)
            }
        }
    }

    /// Run one conversion described by a request
    pub fn convert_request(&self, request: &ConversionRequest) -> ConvertResult<String> {
        self.convert(request.from, request.to, &request.content)
    }
}
