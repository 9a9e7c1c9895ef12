//! Error types for the anova library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! specific variants for grid shape problems, degenerate designs, CSV input
//! and the F-distribution lookup.
//!
//! A negative sum of squares is not an error: it is reported as a
//! [`DesignWarning`](crate::table::DesignWarning) on the finished table.

use thiserror::Error;

use crate::table::SourceKind;

/// The main error type for the anova library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============ Dimension Errors ============
    /// The observation grid has no rows or no columns.
    #[error("dimension error: observation grid is empty")]
    EmptyGrid,

    /// A row has a different number of columns than the first row.
    #[error("dimension error: row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        /// 1-based row index, or the line number when read from CSV.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        actual: usize,
    },

    /// The replicate count is zero.
    #[error("dimension error: replicate count must be at least 1, got {reps}")]
    InvalidReps {
        /// The rejected replicate count.
        reps: usize,
    },

    /// The row count is not a multiple of the replicate count.
    #[error("dimension error: {rows} rows cannot be grouped into blocks of {reps} replicates")]
    RepsMismatch {
        /// Raw row count of the grid.
        rows: usize,
        /// Requested replicate count.
        reps: usize,
    },

    // ============ Design Errors ============
    /// A source of variation ended up with zero or negative degrees of freedom.
    #[error("invalid design: {term} has {df} degrees of freedom")]
    InvalidDesign {
        /// The source whose degrees of freedom failed.
        term: SourceKind,
        /// The computed degrees of freedom.
        df: i64,
    },

    /// The design name is not one of `simple`, `blocked`, `twoway`.
    #[error("unknown design {name:?} (allowed: simple, blocked, twoway)")]
    UnknownDesign {
        /// The rejected name.
        name: String,
    },

    // ============ Input Errors ============
    /// A CSV field could not be parsed as a number.
    #[error("parse error at row {row}, column {column}: {value:?} is not a number")]
    Parse {
        /// 1-based line number in the input.
        row: usize,
        /// 1-based field number within the record.
        column: usize,
        /// The raw field text.
        value: String,
    },

    /// The input could not be read.
    #[error("failed to read input: {message}")]
    Read {
        /// Description of the underlying I/O or CSV failure.
        message: String,
    },

    // ============ Distribution Errors ============
    /// The F-distribution rejected its parameters.
    #[error("F-distribution error: {message}")]
    Distribution {
        /// Description of why the distribution could not be evaluated.
        message: String,
    },
}

/// A specialized `Result` type for anova operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `Read` error.
    #[must_use]
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read {
            message: message.into(),
        }
    }

    /// Create a new `Distribution` error.
    #[must_use]
    pub fn distribution(message: impl Into<String>) -> Self {
        Self::Distribution {
            message: message.into(),
        }
    }

    /// Whether this error describes a malformed grid shape.
    #[must_use]
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyGrid
                | Self::RaggedRow { .. }
                | Self::InvalidReps { .. }
                | Self::RepsMismatch { .. }
        )
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::read(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::read(err.to_string())
    }
}
