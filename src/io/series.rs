//! CSV data source for the observed series.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::info;

use crate::error::{ForecastError, Result};

/// Reads one numeric column from a CSV file.
///
/// # Arguments
///
/// * `path` - CSV file path
/// * `column` - Zero-based column index
/// * `header_rows` - Number of leading records to skip
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the CSV is malformed, or a
/// cell in `column` is missing or not a number.
pub fn load_series(path: &Path, column: usize, header_rows: usize) -> Result<Vec<f64>> {
    let file = File::open(path)?;
    let values = read_series(file, column, header_rows)?;
    info!("loaded {} values from {}", values.len(), path.display());
    Ok(values)
}

/// Reads one numeric column from any CSV reader.
///
/// Rows may have differing field counts; cells are trimmed before parsing.
/// Blank lines are ignored and do not count toward `header_rows`.
///
/// # Errors
///
/// Returns `ForecastError::Parse` with the 1-based record number for a
/// missing or non-numeric cell, or `ForecastError::Csv` for malformed input.
pub fn read_series(reader: impl Read, column: usize, header_rows: usize) -> Result<Vec<f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut values = Vec::new();
    for (i, record) in rdr.records().enumerate().skip(header_rows) {
        let record = record?;
        let cell = record.get(column).unwrap_or("");
        let value = cell.parse::<f64>().map_err(|_| ForecastError::Parse {
            row: i + 1,
            column,
            value: cell.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}
