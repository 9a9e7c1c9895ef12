//! Two-way factorial ANOVA with interaction.

use super::correction::{group_ss, ss_tolerance, total_ss};
use super::{signed, AnalysisConfig, Design};
use crate::error::Result;
use crate::grid::Grid;
use crate::table::{AnovaTable, SourceKind, TableBuilder};

/// Two-way factorial ANOVA.
///
/// Columns are the levels of the column factor; each run of `reps`
/// consecutive rows is one level of the row factor, so every aggregated cell
/// holds `reps` replicates of one factor combination.
/// Rows: `faccol`, `facrow`, `inter`, `err`, `total`.
///
/// ```text
/// n_fac1 = C, n_fac2 = R / reps, obs_per_square = R / n_fac2
/// faccol.SS = Σ A_j² / R − CM                   faccol.DF = n_fac1 − 1
/// facrow.SS = Σ B_i² / (N / n_fac2) − CM        facrow.DF = n_fac2 − 1
/// inter.SS  = Σ cell² / obs_per_square − CM − faccol.SS − facrow.SS
/// inter.DF  = faccol.DF × facrow.DF
/// err       = total − faccol − facrow − inter
/// ```
///
/// # Errors
///
/// Returns a dimension error for a bad `reps`, and
/// [`Error::InvalidDesign`](crate::Error::InvalidDesign) when either factor
/// has a single level or there are no replicates to estimate error from
/// (`reps == 1`).
pub fn twoway_anova(grid: &Grid, reps: usize, config: &AnalysisConfig) -> Result<AnovaTable> {
    let agg = grid.aggregate(reps)?;
    let n = agg.n();
    let grand_total = agg.grand_total();

    let n_fac1 = agg.n_cols();
    let obs_per_fac1 = agg.n_rows();
    let n_fac2 = obs_per_fac1 / reps;
    let obs_per_fac2 = n / n_fac2;
    let obs_per_square = obs_per_fac1 / n_fac2;

    let faccol_ss = group_ss(agg.column_sums(), obs_per_fac1, n, grand_total);
    let facrow_ss = group_ss(agg.row_sums(), obs_per_fac2, n, grand_total);
    let cells_ss = group_ss(agg.cells().iter(), obs_per_square, n, grand_total);
    let inter_ss = cells_ss - faccol_ss - facrow_ss;

    let faccol_df = signed(n_fac1) - 1;
    let facrow_df = signed(n_fac2) - 1;

    TableBuilder::new(Design::TwoWay, ss_tolerance(grid, config.ss_tolerance))
        .term(SourceKind::FacCol, faccol_df, faccol_ss)
        .term(SourceKind::FacRow, facrow_df, facrow_ss)
        .term(SourceKind::Inter, faccol_df * facrow_df, inter_ss)
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
    fn test_crossed_interaction_is_significant() {
        // 2x2 with two replicates per cell; the effect of the column factor
        // reverses between row levels, so neither main effect shows.
        let grid = Grid::from_rows(&[
            [10.0, 20.0],
            [10.5, 19.5],
            [20.0, 10.0],
            [19.5, 10.5],
        ])
        .unwrap();
        let table = twoway_anova(&grid, 2, &AnalysisConfig::default()).unwrap();

        assert!(source(&table, SourceKind::FacCol).sum_of_squares.abs() < 1e-9);
        assert!(source(&table, SourceKind::FacRow).sum_of_squares.abs() < 1e-9);
        assert!((source(&table, SourceKind::Inter).sum_of_squares - 180.5).abs() < 1e-9);
        assert!((source(&table, SourceKind::Err).sum_of_squares - 0.5).abs() < 1e-9);

        let inter = source(&table, SourceKind::Inter);
        assert!((inter.f_ratio.unwrap() - 1444.0).abs() < 1e-6);
        assert!(inter.p_value.unwrap() < 0.05);
        assert_additive(&table);
    }

    #[test]
    fn test_additive_model_has_no_interaction() {
        // Column effect +10, row effect +5, replicate noise only
        let grid = Grid::from_rows(&[
            [10.0, 20.5],
            [11.0, 19.5],
            [15.5, 25.0],
            [14.5, 26.0],
        ])
        .unwrap();
        let table = twoway_anova(&grid, 2, &AnalysisConfig::default()).unwrap();

        assert!((source(&table, SourceKind::FacCol).sum_of_squares - 200.0).abs() < 1e-9);
        assert!((source(&table, SourceKind::FacRow).sum_of_squares - 50.0).abs() < 1e-9);
        assert!((source(&table, SourceKind::Inter).sum_of_squares - 0.5).abs() < 1e-9);

        let inter = source(&table, SourceKind::Inter);
        assert!((inter.f_ratio.unwrap() - 1.0).abs() < 1e-9);
        assert!(inter.p_value.unwrap() > 0.05);
        assert!(source(&table, SourceKind::FacCol).p_value.unwrap() < 0.05);
        assert_additive(&table);
    }

    #[test]
    fn test_degrees_of_freedom() {
        let grid = Grid::from_rows(&[
            [3.0, 5.0, 4.0],
            [4.0, 6.0, 5.0],
            [5.0, 9.0, 5.0],
            [6.0, 8.0, 7.0],
            [2.0, 7.0, 3.0],
            [3.0, 6.0, 4.0],
        ])
        .unwrap();
        let table = twoway_anova(&grid, 2, &AnalysisConfig::default()).unwrap();

        assert_eq!(source(&table, SourceKind::FacCol).degrees_of_freedom, 2);
        assert_eq!(source(&table, SourceKind::FacRow).degrees_of_freedom, 2);
        assert_eq!(source(&table, SourceKind::Inter).degrees_of_freedom, 4);
        assert_eq!(source(&table, SourceKind::Err).degrees_of_freedom, 9);
        assert_eq!(source(&table, SourceKind::Total).degrees_of_freedom, 17);
        assert!((source(&table, SourceKind::Err).sum_of_squares - 6.0).abs() < 1e-9);
        assert_additive(&table);
    }

    #[test]
    fn test_unreplicated_has_no_error_df() {
        let grid = Grid::from_rows(&[[1.0, 2.0], [3.0, 5.0]]).unwrap();
        let err = twoway_anova(&grid, 1, &AnalysisConfig::default()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDesign {
                term: SourceKind::Err,
                df: 0
            }
        );
    }

    #[test]
    fn test_single_column_level_is_invalid() {
        let grid = Grid::from_rows(&[[1.0], [2.0], [3.0], [5.0]]).unwrap();
        let err = twoway_anova(&grid, 2, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDesign {
                term: SourceKind::FacCol,
                df: 0
            }
        ));
    }
}
