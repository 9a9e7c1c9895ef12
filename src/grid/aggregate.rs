//! Block aggregation of replicate rows.

use ndarray::{Array2, Axis};

use super::Grid;
use crate::error::{Error, Result};

/// A grid with every `reps` consecutive raw rows summed element-wise.
///
/// Row sums index blocks (or row-factor levels), column sums index
/// treatments (or column-factor levels).
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregated {
    cells: Array2<f64>,
    column_sums: Vec<f64>,
    row_sums: Vec<f64>,
    grand_total: f64,
    n: usize,
    n_rows: usize,
    reps: usize,
}

impl Aggregated {
    /// Block-summed cells, `blocks() × n_cols()`.
    #[must_use]
    pub fn cells(&self) -> &Array2<f64> {
        &self.cells
    }

    /// Sum of each column over all blocks.
    #[must_use]
    pub fn column_sums(&self) -> &[f64] {
        &self.column_sums
    }

    /// Sum of each block over all columns.
    #[must_use]
    pub fn row_sums(&self) -> &[f64] {
        &self.row_sums
    }

    /// Sum of every observation.
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.grand_total
    }

    /// Total observation count of the raw grid (N).
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Column count (C).
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Raw row count (R), which is also the observation count per column.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of aggregated rows (R / reps).
    #[must_use]
    pub fn blocks(&self) -> usize {
        self.cells.nrows()
    }

    /// Replicate count used to build this aggregate.
    #[must_use]
    pub fn reps(&self) -> usize {
        self.reps
    }
}

/// Sum every `reps` consecutive rows of `grid` into one block row.
///
/// Aggregated row `i`, column `j` is the sum of raw rows
/// `[i * reps, (i + 1) * reps)` at column `j`.
///
/// # Errors
///
/// Returns a dimension error if `reps` is zero or does not divide the raw
/// row count. The remainder is never silently dropped.
///
/// # Example
///
/// ```
/// use anova::{aggregate, Grid};
///
/// let grid = Grid::from_rows(&[[4.0, 5.0], [6.0, 7.0], [8.0, 9.0], [10.0, 11.0]]).unwrap();
/// let agg = aggregate(&grid, 2).unwrap();
///
/// assert_eq!(agg.row_sums(), &[22.0, 38.0]);
/// assert_eq!(agg.column_sums(), &[28.0, 32.0]);
/// assert_eq!(agg.grand_total(), 60.0);
/// ```
pub fn aggregate(grid: &Grid, reps: usize) -> Result<Aggregated> {
    if reps == 0 {
        return Err(Error::InvalidReps { reps });
    }

    let n_rows = grid.rows();
    if n_rows % reps != 0 {
        return Err(Error::RepsMismatch { rows: n_rows, reps });
    }

    let mut cells = Array2::<f64>::zeros((n_rows / reps, grid.cols()));
    for (mut block, chunk) in cells
        .rows_mut()
        .into_iter()
        .zip(grid.data().axis_chunks_iter(Axis(0), reps))
    {
        for raw in chunk.rows() {
            block += &raw;
        }
    }

    let column_sums: Vec<f64> = cells
        .columns()
        .into_iter()
        .map(|col| col.iter().fold(0.0, |acc, &x| acc + x))
        .collect();
    let row_sums: Vec<f64> = cells
        .rows()
        .into_iter()
        .map(|row| row.iter().fold(0.0, |acc, &x| acc + x))
        .collect();
    let grand_total = column_sums.iter().fold(0.0, |acc, &x| acc + x);

    log::debug!(
        "aggregated {}x{} grid into {} blocks of {} replicates",
        n_rows,
        grid.cols(),
        cells.nrows(),
        reps
    );

    Ok(Aggregated {
        cells,
        column_sums,
        row_sums,
        grand_total,
        n: grid.len(),
        n_rows,
        reps,
    })
}
