//! F-distribution lookup for ANOVA p-values.
//!
//! Wraps `statrs`'s Fisher-Snedecor distribution and pins down the edge
//! cases an ANOVA table can produce (zero, infinite and NaN statistics).

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::error::{Error, Result};

/// Right-tail probability P(F > f) for F(df1, df2).
///
/// # Arguments
/// * `df1` - Numerator degrees of freedom
/// * `df2` - Denominator degrees of freedom
/// * `f` - Observed F statistic
///
/// # Returns
/// * p-value in [0, 1]; `f <= 0` gives 1, `f = +inf` gives 0, NaN propagates
///
/// # Errors
/// Returns [`Error::Distribution`] if either degrees of freedom is zero.
///
/// # Example
///
/// ```
/// use anova::f_survival;
///
/// // F(2, 2) has survival function 1 / (1 + f)
/// let p = f_survival(2, 2, 3.0).unwrap();
/// assert!((p - 0.25).abs() < 1e-10);
/// ```
pub fn f_survival(df1: usize, df2: usize, f: f64) -> Result<f64> {
    if df1 == 0 || df2 == 0 {
        return Err(Error::distribution(format!(
            "degrees of freedom must be positive, got ({df1}, {df2})"
        )));
    }
    if f.is_nan() {
        return Ok(f);
    }
    if f <= 0.0 {
        return Ok(1.0);
    }
    if f.is_infinite() {
        return Ok(0.0);
    }

    #[allow(clippy::cast_precision_loss)]
    let dist = FisherSnedecor::new(df1 as f64, df2 as f64)
        .map_err(|e| Error::distribution(e.to_string()))?;
    Ok(dist.sf(f).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_form_two_two() {
        // F(2, 2): P(F > f) = 1 / (1 + f)
        for f in [0.5, 1.0, 3.0, 9.0] {
            let p = f_survival(2, 2, f).unwrap();
            assert!((p - 1.0 / (1.0 + f)).abs() < 1e-10, "f = {f}, p = {p}");
        }
    }

    #[test]
    fn test_closed_form_two_d2() {
        // F(2, d2): P(F > f) = (1 + 2f/d2)^(-d2/2)
        let p = f_survival(2, 4, 2.0).unwrap();
        assert!((p - 0.25).abs() < 1e-10);

        let p = f_survival(2, 10, 1.5).unwrap();
        let expected = (1.0_f64 + 0.3).powf(-5.0);
        assert!((p - expected).abs() < 1e-10);
    }

    #[test]
    fn test_critical_value() {
        // Tabulated 5% critical value of F(3, 10) is 3.708
        let p = f_survival(3, 10, 3.708).unwrap();
        assert!((p - 0.05).abs() < 1e-3, "p = {p}");
    }

    #[test]
    fn test_edge_cases() {
        assert_eq!(f_survival(3, 10, 0.0).unwrap(), 1.0);
        assert_eq!(f_survival(3, 10, -1.0).unwrap(), 1.0);
        assert_eq!(f_survival(3, 10, f64::INFINITY).unwrap(), 0.0);
        assert!(f_survival(3, 10, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn test_monotone_decreasing() {
        let p_low = f_survival(3, 10, 2.0).unwrap();
        let p_mid = f_survival(3, 10, 4.0).unwrap();
        let p_high = f_survival(3, 10, 8.0).unwrap();
        assert!(p_low > p_mid && p_mid > p_high);
    }

    #[test]
    fn test_zero_df_rejected() {
        assert!(matches!(
            f_survival(0, 5, 1.0),
            Err(Error::Distribution { .. })
        ));
        assert!(matches!(
            f_survival(5, 0, 1.0),
            Err(Error::Distribution { .. })
        ));
    }
}
