//! Command-line interface module

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use crate::conversion::{ConversionConfig, ConversionEngine};
use crate::formats::Format;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "svconv")]
#[command(about = "Convert between CSV, JSON and YAML")]
#[command(version)]
pub struct Args {
    /// Source format (required unless --serve)
    #[arg(long = "from", value_enum)]
    pub from: Option<FormatArg>,

    /// Destination format (required unless --serve)
    #[arg(long = "to", value_enum)]
    pub to: Option<FormatArg>,

    /// Input file path (default: standard input)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file path (default: standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Field delimiter for CSV input and output
    #[arg(short, long, default_value_t = ',')]
    pub delimiter: char,

    /// Pretty-print JSON output (default: compact)
    #[arg(long)]
    pub pretty: bool,

    /// Start the HTTP service instead of converting
    #[arg(long)]
    pub serve: bool,

    /// Port for the HTTP service
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// Format names accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum FormatArg {
    #[value(name = "csv", alias("tabular"))]
    Csv,
    #[value(name = "json", alias("object"))]
    Json,
    #[value(name = "yaml", alias("yml"), alias("markup"))]
    Yaml,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Format::Csv,
            FormatArg::Json => Format::Json,
            FormatArg::Yaml => Format::Yaml,
        }
    }
}

impl Args {
    /// Build the engine configuration from the flags
    pub fn conversion_config(&self) -> Result<ConversionConfig> {
        let delimiter = u8::try_from(self.delimiter)
            .map_err(|_| anyhow::anyhow!("delimiter must be a single ASCII character"))?;
        Ok(ConversionConfig {
            delimiter,
            pretty: self.pretty,
        })
    }
}

/// Run one conversion per the CLI flags: read input, convert, write output.
///
/// Returns an error both for I/O failures and for conversion failures; the
/// caller maps any error to exit code 1.
pub fn run_convert(args: &Args, from: Format, to: Format) -> Result<()> {
    let config = args.conversion_config()?;
    let input = read_input(args.input.as_deref())?;

    let engine = ConversionEngine::new(config);
    let output = engine
        .convert(from, to, &input)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    write_output(&output, args.output.as_deref())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            Ok(buffer)
        }
    }
}

fn write_output(text: &str, path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("failed to write output file '{}'", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            Ok(())
        }
    }
}
