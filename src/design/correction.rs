//! Correction-for-mean and grouped sums of squares.
//!
//! Every design partitions the same corrected total. For any grouping of the
//! N observations into groups of equal size `g` with totals `s_k`:
//!
//! ```text
//! CM       = grand_total² / N
//! SS_group = Σ (s_k² / g) − CM
//! SS_total = Σ x² − CM
//! ```

use crate::grid::{sum_x, sum_xsq, Grid};

/// Correction term `grand_total² / n`.
#[must_use]
pub fn correction_for_mean(grand_total: f64, n: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let n = n as f64;
    grand_total * grand_total / n
}

/// Sum of squares between groups of `group_size` observations each.
///
/// Used for treatments, blocks, both factors and the two-way cells; only the
/// grouping changes. The result does not depend on the order of
/// `group_sums`.
///
/// # Example
///
/// ```
/// use anova::group_ss;
///
/// // Two treatments of 4 observations, totals 28 and 32, grand total 60
/// let ss = group_ss(&[28.0, 32.0], 4, 8, 60.0);
/// assert!((ss - 2.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn group_ss<'a, I>(group_sums: I, group_size: usize, n: usize, grand_total: f64) -> f64
where
    I: IntoIterator<Item = &'a f64>,
{
    #[allow(clippy::cast_precision_loss)]
    let size = group_size as f64;
    let between = group_sums
        .into_iter()
        .fold(0.0, |acc, &s| acc + s * s / size);
    between - correction_for_mean(grand_total, n)
}

/// Corrected total sum of squares over the raw observations.
#[must_use]
pub fn total_ss(grid: &Grid) -> f64 {
    sum_xsq(grid) - correction_for_mean(sum_x(grid), grid.len())
}

/// Absolute slack below zero tolerated for a sum of squares, scaled by the
/// magnitude of the data.
pub(crate) fn ss_tolerance(grid: &Grid, relative: f64) -> f64 {
    relative * sum_xsq(grid).abs().max(1.0)
}
