//! Assembly of decomposed sums of squares into an [`AnovaTable`].
//!
//! Every design hands its effect terms and the total to [`TableBuilder`];
//! the error row, mean squares, F-ratios and p-values are derived here so
//! the bookkeeping is identical across designs.

use super::{AnovaTable, DesignWarning, Source, SourceKind};
use crate::design::Design;
use crate::error::{Error, Result};
use crate::stats::f_survival;

/// Collects effect terms and assembles the final table.
#[derive(Debug, Clone)]
pub(crate) struct TableBuilder {
    design: Design,
    tolerance: f64,
    terms: Vec<(SourceKind, i64, f64)>,
}

impl TableBuilder {
    /// Start a table. `tolerance` is the absolute slack below zero allowed
    /// for any sum of squares before it is flagged.
    pub(crate) fn new(design: Design, tolerance: f64) -> Self {
        Self {
            design,
            tolerance,
            terms: Vec::with_capacity(3),
        }
    }

    /// Add an effect term in table order.
    #[must_use]
    pub(crate) fn term(mut self, kind: SourceKind, df: i64, ss: f64) -> Self {
        self.terms.push((kind, df, ss));
        self
    }

    /// Snap rounding noise in `[-tolerance, 0)` to exactly zero. Anything
    /// further below zero is kept and flagged.
    fn settle(&self, ss: f64) -> f64 {
        if ss < 0.0 && ss >= -self.tolerance {
            0.0
        } else {
            ss
        }
    }

    /// Derive the error row from the total and finish the table.
    ///
    /// Degrees of freedom are validated before any division.
    pub(crate) fn build(self, total_df: i64, total_ss: f64) -> Result<AnovaTable> {
        let err_df = total_df - self.terms.iter().map(|&(_, df, _)| df).sum::<i64>();
        let err_ss = self
            .terms
            .iter()
            .fold(total_ss, |acc, &(_, _, ss)| acc - ss);

        let mut checked = Vec::with_capacity(self.terms.len());
        for &(kind, df, ss) in &self.terms {
            checked.push((kind, positive_df(kind, df)?, self.settle(ss)));
        }
        let err_df = positive_df(SourceKind::Err, err_df)?;
        let total_df = positive_df(SourceKind::Total, total_df)?;

        let mut warnings = Vec::new();
        let err_ss = self.settle(err_ss);
        let total_ss = self.settle(total_ss);
        let all_ss = checked
            .iter()
            .map(|&(kind, _, ss)| (kind, ss))
            .chain([(SourceKind::Err, err_ss), (SourceKind::Total, total_ss)]);
        for (kind, ss) in all_ss {
            if ss < 0.0 {
                let warning = DesignWarning {
                    kind,
                    sum_of_squares: ss,
                };
                log::warn!("{warning}");
                warnings.push(warning);
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let err_ms = err_ss / err_df as f64;

        let mut sources = Vec::with_capacity(checked.len() + 2);
        for (kind, df, ss) in checked {
            #[allow(clippy::cast_precision_loss)]
            let ms = ss / df as f64;
            let f_ratio = ms / err_ms;
            let p_value = f_survival(df, err_df, f_ratio)?;
            log::debug!("{kind}: df={df} ss={ss} ms={ms} F={f_ratio} p={p_value}");

            sources.push(Source {
                kind,
                degrees_of_freedom: df,
                sum_of_squares: ss,
                mean_square: Some(ms),
                f_ratio: Some(f_ratio),
                p_value: Some(p_value),
            });
        }

        sources.push(Source {
            kind: SourceKind::Err,
            degrees_of_freedom: err_df,
            sum_of_squares: err_ss,
            mean_square: Some(err_ms),
            f_ratio: None,
            p_value: None,
        });
        sources.push(Source {
            kind: SourceKind::Total,
            degrees_of_freedom: total_df,
            sum_of_squares: total_ss,
            mean_square: None,
            f_ratio: None,
            p_value: None,
        });

        Ok(AnovaTable {
            design: self.design,
            sources,
            warnings,
        })
    }
}

fn positive_df(term: SourceKind, df: i64) -> Result<usize> {
    match usize::try_from(df) {
        Ok(df) if df > 0 => Ok(df),
        _ => Err(Error::InvalidDesign { term, df }),
    }
}
