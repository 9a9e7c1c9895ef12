//! ANOVA table types.
//!
//! A finished analysis is an [`AnovaTable`]: an ordered list of [`Source`]
//! records, one per source of variation, plus any [`DesignWarning`]s raised
//! while it was assembled.

mod builder;
mod render;

pub(crate) use builder::TableBuilder;
pub use render::{render, RenderConfig, HEADERS};

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::design::Design;

/// A named source of variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SourceKind {
    /// Treatments (columns) in simple and blocked designs.
    Treats,
    /// Blocks (aggregated rows) in a blocked design.
    Blocks,
    /// Factor across columns in a two-way design.
    FacCol,
    /// Factor across rows in a two-way design.
    FacRow,
    /// Column × row interaction in a two-way design.
    Inter,
    /// Residual error.
    Err,
    /// Total (corrected) variation.
    Total,
}

impl SourceKind {
    /// Label used in rendered tables.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Treats => "treats",
            Self::Blocks => "blocks",
            Self::FacCol => "faccol",
            Self::FacRow => "facrow",
            Self::Inter => "inter",
            Self::Err => "err",
            Self::Total => "total",
        }
    }

    /// Whether this source is tested against the error mean square.
    #[must_use]
    pub fn is_effect(self) -> bool {
        !matches!(self, Self::Err | Self::Total)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of an ANOVA table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Source {
    /// Which source of variation this row describes.
    pub kind: SourceKind,
    /// Degrees of freedom.
    pub degrees_of_freedom: usize,
    /// Sum of squares.
    pub sum_of_squares: f64,
    /// Mean square (SS / df), None for the total row.
    pub mean_square: Option<f64>,
    /// F-ratio (MS / MS_error), None for error and total.
    pub f_ratio: Option<f64>,
    /// P-value from the F-distribution, None for error and total.
    pub p_value: Option<f64>,
}

/// Flag for a sum of squares that came out negative beyond tolerance.
///
/// A valid design never produces negative variance; this points at an input
/// whose shape does not match the chosen design or replicate count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DesignWarning {
    /// The source with the negative sum of squares.
    pub kind: SourceKind,
    /// The offending value.
    pub sum_of_squares: f64,
}

impl fmt::Display for DesignWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "design mismatch: {} has negative sum of squares {:.6e}; check the replicate count and row layout",
            self.kind, self.sum_of_squares
        )
    }
}

/// A complete ANOVA table in design-specific order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnovaTable {
    design: Design,
    sources: Vec<Source>,
    warnings: Vec<DesignWarning>,
}

impl AnovaTable {
    /// The design this table was computed for.
    #[must_use]
    pub fn design(&self) -> Design {
        self.design
    }

    /// All rows, effects first, then error, then total.
    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Look up a row by kind.
    #[must_use]
    pub fn get(&self, kind: SourceKind) -> Option<&Source> {
        self.sources.iter().find(|s| s.kind == kind)
    }

    /// Rows tested against error (every row except error and total).
    pub fn effects(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter().filter(|s| s.kind.is_effect())
    }

    /// Negative sum-of-squares flags raised during assembly.
    #[must_use]
    pub fn warnings(&self) -> &[DesignWarning] {
        &self.warnings
    }

    /// Whether any design mismatch was detected.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl fmt::Display for AnovaTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, &RenderConfig::default()))
    }
}
