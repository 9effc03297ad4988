//! Configuration options for a conversion

/// Options shared by every conversion
#[derive(Debug, Clone, Copy)]
pub struct ConversionConfig {
    /// Field delimiter for tabular input and output
    pub delimiter: u8,
    /// Pretty-print object-notation output (vs compact)
    pub pretty: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            pretty: true,
        }
    }
}

impl ConversionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tabular delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Toggle pretty object-notation output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
