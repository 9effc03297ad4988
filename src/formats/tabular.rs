//! Tabular (CSV) adapter
//!
//! Parses delimited text into ordered rows and writes rows back out. The
//! first line is always the header; cell values are kept as text and never
//! type-coerced. Quoting (embedded delimiters, newlines, doubled quotes) is
//! handled by the `csv` crate on both sides.

use indexmap::IndexMap;

use crate::error::{ParseError, SerializeError};

/// One row: field name to text value, in field order
pub type Row = IndexMap<String, String>;

/// Parse delimited text into a row set.
///
/// The header line names the fields; every row only carries keys drawn from
/// it. Ragged input is tolerated: fields beyond the header are dropped and
/// short records simply lack the trailing keys. Empty input yields no rows.
pub fn parse(text: &str, delimiter: u8) -> Result<Vec<Row>, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = Row::new();
        for (i, field) in record.iter().enumerate() {
            if let Some(name) = headers.get(i) {
                row.insert(name.clone(), field.to_string());
            }
        }
        rows.push(row);
    }

    log::debug!("parsed {} tabular rows", rows.len());
    Ok(rows)
}

/// Serialize a row set to delimited text.
///
/// The header is the union of all keys across all rows in first-seen order;
/// rows missing a key emit an empty cell. An empty row set serializes to
/// empty text with no header line.
pub fn serialize(rows: &[Row], delimiter: u8) -> Result<String, SerializeError> {
    if rows.is_empty() {
        return Ok(String::new());
    }

    let header = union_header(rows);

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer
        .write_record(&header)
        .map_err(|e| SerializeError::Tabular(e.to_string()))?;
    for row in rows {
        let record = header
            .iter()
            .map(|name| row.get(name).map(String::as_str).unwrap_or(""));
        writer
            .write_record(record)
            .map_err(|e| SerializeError::Tabular(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SerializeError::Tabular(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Tabular(e.to_string()))
}

/// All keys seen across all rows, in first-seen order
pub fn union_header(rows: &[Row]) -> Vec<String> {
    let mut header: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !header.iter().any(|h| h == key) {
                header.push(key.clone());
            }
        }
    }
    header
}
