//! Conversion engine module

pub mod config;
pub mod engine;
pub mod shape;

pub use config::ConversionConfig;
pub use engine::{ConversionEngine, ConversionRequest};

use crate::error::ConvertResult;
use crate::formats::Format;

/// Convert text between two formats with the given configuration
pub fn convert_text(
    from: Format,
    to: Format,
    input: &str,
    config: &ConversionConfig,
) -> ConvertResult<String> {
    ConversionEngine::new(*config).convert(from, to, input)
}
