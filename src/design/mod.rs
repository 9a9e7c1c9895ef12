//! Experimental designs and their variance decompositions.
//!
//! This module partitions the corrected total sum of squares of a [`Grid`]
//! according to one of three designs:
//!
//! - [`Design::Simple`]: one-way ANOVA over the columns (treatments)
//! - [`Design::Blocked`]: randomized complete block design, columns are
//!   treatments and each run of `reps` rows is a block
//! - [`Design::TwoWay`]: two-way factorial, columns are one factor, each run
//!   of `reps` rows is a level of the other, and `reps` is the number of
//!   replicates per cell
//!
//! ## Quick Start
//!
//! ```rust
//! use anova::{analyze, AnalysisConfig, Design, Grid, SourceKind};
//!
//! let grid = Grid::from_rows(&[[4.0, 5.0], [6.0, 7.0], [8.0, 9.0], [10.0, 11.0]]).unwrap();
//! let table = analyze(Design::Simple, &grid, 2, &AnalysisConfig::default()).unwrap();
//!
//! assert_eq!(table.get(SourceKind::Treats).unwrap().degrees_of_freedom, 1);
//! assert_eq!(table.get(SourceKind::Err).unwrap().degrees_of_freedom, 6);
//! assert_eq!(table.get(SourceKind::Total).unwrap().degrees_of_freedom, 7);
//! ```
//!
//! ## Input layout
//!
//! Only divisibility of the row count by `reps` and rectangularity are
//! checked. Rows must be ordered so that each consecutive run of `reps` rows
//! belongs to one block (or row-factor level). A grid in a different order
//! still produces a table; a negative sum of squares is reported as a
//! [`DesignWarning`](crate::table::DesignWarning), but a plausible-looking
//! wrong table cannot be detected.

mod blocked;
mod correction;
mod simple;
mod twoway;

pub use blocked::blocked_anova;
pub use correction::{correction_for_mean, group_ss, total_ss};
pub use simple::simple_anova;
pub use twoway::twoway_anova;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::table::{AnovaTable, SourceKind};

/// Configuration for ANOVA calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnalysisConfig {
    /// Relative tolerance below zero for a sum of squares before it is
    /// flagged, scaled by Σx² (default: 1e-9).
    pub ss_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { ss_tolerance: 1e-9 }
    }
}

/// The experimental design to decompose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Design {
    /// One-way ANOVA.
    Simple,
    /// Randomized complete block design.
    Blocked,
    /// Two-way factorial with interaction.
    TwoWay,
}

impl Design {
    /// All designs, in CLI order.
    pub const ALL: [Design; 3] = [Design::Simple, Design::Blocked, Design::TwoWay];

    /// Name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Blocked => "blocked",
            Self::TwoWay => "twoway",
        }
    }

    /// Rows of the resulting table, in order.
    #[must_use]
    pub fn sources(self) -> &'static [SourceKind] {
        match self {
            Self::Simple => &[SourceKind::Treats, SourceKind::Err, SourceKind::Total],
            Self::Blocked => &[
                SourceKind::Treats,
                SourceKind::Blocks,
                SourceKind::Err,
                SourceKind::Total,
            ],
            Self::TwoWay => &[
                SourceKind::FacCol,
                SourceKind::FacRow,
                SourceKind::Inter,
                SourceKind::Err,
                SourceKind::Total,
            ],
        }
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Design {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| Error::UnknownDesign {
                name: s.to_string(),
            })
    }
}

/// Run the decomposition for `design`.
///
/// # Errors
///
/// - a dimension error if `reps` is zero or does not divide the row count
/// - [`Error::InvalidDesign`] if any source ends up with no degrees of freedom
pub fn analyze(
    design: Design,
    grid: &Grid,
    reps: usize,
    config: &AnalysisConfig,
) -> Result<AnovaTable> {
    log::debug!(
        "running {design} ANOVA on {}x{} grid, reps={reps}",
        grid.rows(),
        grid.cols()
    );
    match design {
        Design::Simple => simple_anova(grid, reps, config),
        Design::Blocked => blocked_anova(grid, reps, config),
        Design::TwoWay => twoway_anova(grid, reps, config),
    }
}

/// Convert a count to signed form so degrees of freedom can go negative
/// before validation.
pub(crate) fn signed(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
