//! One-way ANOVA.

use super::correction::{group_ss, ss_tolerance, total_ss};
use super::{signed, AnalysisConfig, Design};
use crate::error::Result;
use crate::grid::Grid;
use crate::table::{AnovaTable, SourceKind, TableBuilder};

/// One-way ANOVA with the columns as treatments.
///
/// Rows: `treats`, `err`, `total`.
///
/// ```text
/// treats.DF = C − 1          treats.SS = Σ T_j² / R − CM
/// total.DF  = N − 1          total.SS  = Σ x² − CM
/// err       = total − treats
/// ```
///
/// `reps` only has to divide the row count; the treatment totals do not
/// depend on how rows are blocked.
///
/// # Errors
///
/// Returns a dimension error for a bad `reps`, and
/// [`Error::InvalidDesign`](crate::Error::InvalidDesign) for a single
/// column or a single observation per treatment.
pub fn simple_anova(grid: &Grid, reps: usize, config: &AnalysisConfig) -> Result<AnovaTable> {
    let agg = grid.aggregate(reps)?;
    let n = agg.n();
    let n_treats = agg.n_cols();
    let obs_per_treat = agg.n_rows();

    let treats_ss = group_ss(agg.column_sums(), obs_per_treat, n, agg.grand_total());

    TableBuilder::new(Design::Simple, ss_tolerance(grid, config.ss_tolerance))
        .term(SourceKind::Treats, signed(n_treats) - 1, treats_ss)
        .build(signed(n) - 1, total_ss(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::test_support::assert_additive;
    use crate::error::Error;

    fn source(table: &AnovaTable, kind: SourceKind) -> &crate::table::Source {
        table.get(kind).unwrap()
    }

    #[test]
    fn test_scenario_grid() {
        let grid = Grid::from_rows(&[[4.0, 5.0], [6.0, 7.0], [8.0, 9.0], [10.0, 11.0]]).unwrap();
        let table = simple_anova(&grid, 2, &AnalysisConfig::default()).unwrap();

        assert_eq!(source(&table, SourceKind::Treats).degrees_of_freedom, 1);
        assert_eq!(source(&table, SourceKind::Total).degrees_of_freedom, 7);
        assert_eq!(source(&table, SourceKind::Err).degrees_of_freedom, 6);

        // CM = 450, treats = (28² + 32²)/4 − 450 = 2, total = 492 − 450 = 42
        assert!((source(&table, SourceKind::Treats).sum_of_squares - 2.0).abs() < 1e-10);
        assert!((source(&table, SourceKind::Total).sum_of_squares - 42.0).abs() < 1e-10);
        assert!((source(&table, SourceKind::Err).sum_of_squares - 40.0).abs() < 1e-10);

        let f = source(&table, SourceKind::Treats).f_ratio.unwrap();
        assert!((f - 2.0 / (40.0 / 6.0)).abs() < 1e-10);
        assert_additive(&table);
    }

    #[test]
    fn test_reps_does_not_change_result() {
        let grid = Grid::from_rows(&[[4.0, 5.0], [6.0, 7.0], [8.0, 9.0], [10.0, 11.0]]).unwrap();
        let config = AnalysisConfig::default();
        let a = simple_anova(&grid, 1, &config).unwrap();
        let b = simple_anova(&grid, 4, &config).unwrap();
        for (x, y) in a.sources().iter().zip(b.sources()) {
            assert_eq!(x.degrees_of_freedom, y.degrees_of_freedom);
            assert!((x.sum_of_squares - y.sum_of_squares).abs() < 1e-10);
        }
    }

    #[test]
    fn test_textbook_one_way() {
        // Three treatments, five observations each
        let grid = Grid::from_rows(&[
            [7.0, 12.0, 14.0],
            [7.0, 17.0, 18.0],
            [15.0, 12.0, 18.0],
            [11.0, 18.0, 19.0],
            [9.0, 18.0, 19.0],
        ])
        .unwrap();
        let table = simple_anova(&grid, 1, &AnalysisConfig::default()).unwrap();

        // Totals 49, 77, 88; grand 214; CM = 214²/15
        let cm = 214.0_f64 * 214.0 / 15.0;
        let treats = (49.0_f64 * 49.0 + 77.0 * 77.0 + 88.0 * 88.0) / 5.0 - cm;
        assert!((source(&table, SourceKind::Treats).sum_of_squares - treats).abs() < 1e-9);
        assert_eq!(source(&table, SourceKind::Err).degrees_of_freedom, 12);

        let p = source(&table, SourceKind::Treats).p_value.unwrap();
        assert!(p < 0.01, "p = {p}");
        assert_additive(&table);
    }

    #[test]
    fn test_single_treatment_is_invalid() {
        let grid = Grid::from_rows(&[[1.0], [2.0], [3.0], [4.0]]).unwrap();
        let err = simple_anova(&grid, 2, &AnalysisConfig::default()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDesign {
                term: SourceKind::Treats,
                df: 0
            }
        );
    }

    #[test]
    fn test_single_row_has_no_error_df() {
        let grid = Grid::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
        let err = simple_anova(&grid, 1, &AnalysisConfig::default()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDesign {
                term: SourceKind::Err,
                df: 0
            }
        );
    }

    #[test]
    fn test_indivisible_rows() {
        let grid = Grid::from_rows(&[[1.0, 2.0], [2.0, 3.0], [3.0, 4.0], [4.0, 5.0], [5.0, 6.0]])
            .unwrap();
        let err = simple_anova(&grid, 2, &AnalysisConfig::default()).unwrap_err();
        assert_eq!(err, Error::RepsMismatch { rows: 5, reps: 2 });
    }
}
