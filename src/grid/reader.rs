//! CSV input for observation grids.

use std::fs::File;
use std::io::Read;
use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Grid;
use crate::error::{Error, Result};

/// Configuration for reading a grid from CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReaderConfig {
    /// Field delimiter (default: `b','`).
    pub delimiter: u8,
    /// Whether the first record is a header row to skip (default: false).
    pub has_headers: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_headers: false,
        }
    }
}

/// Read a numeric grid from CSV data.
///
/// Every field must parse as `f64` after trimming whitespace. Blank lines
/// are skipped.
///
/// # Errors
///
/// - [`Error::Parse`] for a non-numeric field, with its line and column
/// - [`Error::RaggedRow`] for a record whose width differs from the first,
///   reported by line number like [`Error::Parse`]
/// - [`Error::EmptyGrid`] for input with no records
/// - [`Error::Read`] for I/O failures
///
/// # Example
///
/// ```
/// use anova::{read_grid, ReaderConfig};
///
/// let csv = "4,5\n6,7\n8,9\n10,11\n";
/// let grid = read_grid(csv.as_bytes(), &ReaderConfig::default()).unwrap();
/// assert_eq!(grid.rows(), 4);
/// assert_eq!(grid.cols(), 2);
/// ```
pub fn read_grid<R: Read>(reader: R, config: &ReaderConfig) -> Result<Grid> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(idx + 1, |pos| usize::try_from(pos.line()).unwrap_or(usize::MAX));

        if let Some(first) = rows.first() {
            if record.len() != first.len() {
                return Err(Error::RaggedRow {
                    row: line,
                    expected: first.len(),
                    actual: record.len(),
                });
            }
        }

        let row = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                field.parse::<f64>().map_err(|_| Error::Parse {
                    row: line,
                    column: col + 1,
                    value: field.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }

    log::debug!("read {} records from CSV input", rows.len());
    Grid::from_rows(&rows)
}

/// Read a numeric grid from a CSV file.
///
/// The file is read completely and closed before this returns.
///
/// # Errors
///
/// Returns [`Error::Read`] if the file cannot be opened, otherwise the same
/// errors as [`read_grid`].
pub fn read_grid_from_path(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Grid> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::read(format!("cannot open {}: {e}", path.display())))?;
    read_grid(file, config)
}
