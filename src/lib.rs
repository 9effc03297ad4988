//! svconv: CSV ↔ JSON ↔ YAML converter
//!
//! A conversion engine with three format adapters and the six pairwise
//! transforms between them, plus thin CLI and HTTP front-ends.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formats;
pub mod server;

// Re-export commonly used types
pub use conversion::{convert_text, ConversionConfig, ConversionEngine, ConversionRequest};
pub use error::{ConvertError, ConvertResult, ParseError, SerializeError, ShapeError};
pub use formats::Format;

/// Convert text between two formats with default options
pub fn convert(from: Format, to: Format, input: &str) -> ConvertResult<String> {
    convert_text(from, to, input, &ConversionConfig::default())
}
