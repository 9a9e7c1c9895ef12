//! Randomized complete block ANOVA.

use super::correction::{group_ss, ss_tolerance, total_ss};
use super::{signed, AnalysisConfig, Design};
use crate::error::Result;
use crate::grid::Grid;
use crate::table::{AnovaTable, SourceKind, TableBuilder};

/// Randomized complete block ANOVA.
///
/// Columns are treatments; each run of `reps` consecutive rows is one block.
/// Rows: `treats`, `blocks`, `err`, `total`.
///
/// ```text
/// n_blocks      = R / reps
/// obs_per_block = N / n_blocks
/// treats.SS = Σ T_j² / R − CM              treats.DF = C − 1
/// blocks.SS = Σ B_i² / obs_per_block − CM  blocks.DF = n_blocks − 1
/// err       = total − treats − blocks
/// ```
///
/// # Errors
///
/// Returns a dimension error for a bad `reps`, and
/// [`Error::InvalidDesign`](crate::Error::InvalidDesign) when there is a
/// single treatment, a single block, or no error degrees of freedom left.
pub fn blocked_anova(grid: &Grid, reps: usize, config: &AnalysisConfig) -> Result<AnovaTable> {
    let agg = grid.aggregate(reps)?;
    let n = agg.n();
    let n_treats = agg.n_cols();
    let obs_per_treat = agg.n_rows();
    let n_blocks = obs_per_treat / reps;
    let obs_per_block = n / n_blocks;

    let treats_ss = group_ss(agg.column_sums(), obs_per_treat, n, agg.grand_total());
    let blocks_ss = group_ss(agg.row_sums(), obs_per_block, n, agg.grand_total());

    TableBuilder::new(Design::Blocked, ss_tolerance(grid, config.ss_tolerance))
        .term(SourceKind::Treats, signed(n_treats) - 1, treats_ss)
        .term(SourceKind::Blocks, signed(n_blocks) - 1, blocks_ss)
        .build(signed(n) - 1, total_ss(grid))
}
