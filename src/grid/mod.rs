//! Observation grid and moment calculators.
//!
//! This module provides the raw data structure every design starts from.
//!
//! ## Overview
//!
//! - [`Grid`]: rectangular matrix of observations (rows × columns)
//! - [`Aggregated`]: the grid with every `reps` consecutive rows summed
//! - [`sum_x`] / [`sum_xsq`]: uncorrected moments of the raw grid
//!
//! ## Layout
//!
//! Columns are the treatment (or column-factor) levels. Raw rows come in
//! consecutive runs of `reps` replicates; each run is one block in a blocked
//! design, or one level of the row factor in a two-way design.
//!
//! ```text
//!          col 0  col 1  col 2
//! row 0  [  4.0,   5.0,   6.0 ]  \  block 0 (reps = 2)
//! row 1  [  5.0,   6.0,   7.0 ]  /
//! row 2  [  8.0,   9.0,  10.0 ]  \  block 1
//! row 3  [  9.0,  10.0,  11.0 ]  /
//! ```

mod aggregate;
mod reader;

pub use aggregate::{aggregate, Aggregated};
pub use reader::{read_grid, read_grid_from_path, ReaderConfig};

use ndarray::Array2;

use crate::error::{Error, Result};

/// A rectangular grid of raw observations.
///
/// The grid is validated on construction (non-empty, every row the same
/// width) and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    data: Array2<f64>,
}

impl Grid {
    /// Build a grid from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - there are no rows, or the first row is empty
    /// - any row differs in width from the first
    ///
    /// # Example
    ///
    /// ```
    /// use anova::Grid;
    ///
    /// let grid = Grid::from_rows(&[[4.0, 5.0], [6.0, 7.0]]).unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 2);
    /// assert_eq!(grid.len(), 4);
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if cols == 0 {
            return Err(Error::EmptyGrid);
        }

        let mut values = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::RaggedRow {
                    row: i + 1,
                    expected: cols,
                    actual: row.len(),
                });
            }
            values.extend_from_slice(row);
        }

        let data = Array2::from_shape_vec((rows.len(), cols), values)
            .map_err(|e| Error::read(e.to_string()))?;
        Ok(Self { data })
    }

    /// Wrap an existing matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGrid`] if the matrix has no rows or no columns.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(Error::EmptyGrid);
        }
        Ok(Self { data })
    }

    /// Number of raw rows (R).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns (C).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Total number of observations (N = R·C).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: an empty grid cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The underlying observation matrix.
    #[must_use]
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Sum of every observation.
    #[must_use]
    pub fn sum_x(&self) -> f64 {
        sum_x(self)
    }

    /// Sum of every observation squared.
    #[must_use]
    pub fn sum_xsq(&self) -> f64 {
        sum_xsq(self)
    }

    /// Collapse every `reps` consecutive rows into one block row.
    ///
    /// See [`aggregate`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidReps`](crate::Error::InvalidReps) if `reps` is
    /// zero and [`Error::RepsMismatch`](crate::Error::RepsMismatch) if it
    /// does not divide the row count.
    pub fn aggregate(&self, reps: usize) -> Result<Aggregated> {
        aggregate(self, reps)
    }
}

/// Total of every scalar in the raw grid.
///
/// Accumulates left to right in row-major order. NaN propagates.
#[must_use]
pub fn sum_x(grid: &Grid) -> f64 {
    grid.data.iter().fold(0.0, |acc, &x| acc + x)
}

/// Total of every scalar squared in the raw grid.
///
/// Operates on raw observations, never on aggregated block sums.
#[must_use]
pub fn sum_xsq(grid: &Grid) -> f64 {
    grid.data.iter().fold(0.0, |acc, &x| acc + x * x)
}
