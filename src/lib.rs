//! # anova
//!
//! Analysis of Variance tables for one-way, randomized complete block and
//! two-way factorial experiments.
//!
//! ## Overview
//!
//! Observations are supplied as a rectangular grid. Columns are treatment
//! (or column-factor) levels; raw rows are grouped into consecutive runs of
//! `reps` replicates. The library:
//! - aggregates replicate rows into block totals ([`aggregate`])
//! - partitions the corrected total sum of squares by design
//!   ([`simple_anova`], [`blocked_anova`], [`twoway_anova`])
//! - reports DF, SS, MS, F and p for every source of variation
//!   ([`AnovaTable`])
//!
//! ## Quick Start
//!
//! ```rust
//! use anova::{analyze, AnalysisConfig, Design, Grid, SourceKind};
//!
//! // Four tip types (columns) on four test coupons (blocks)
//! let grid = Grid::from_rows(&[
//!     [9.3, 9.4, 9.2, 9.7],
//!     [9.4, 9.3, 9.4, 9.6],
//!     [9.6, 9.8, 9.5, 10.0],
//!     [10.0, 9.9, 9.7, 10.2],
//! ])
//! .unwrap();
//!
//! let table = analyze(Design::Blocked, &grid, 1, &AnalysisConfig::default()).unwrap();
//!
//! let treats = table.get(SourceKind::Treats).unwrap();
//! assert_eq!(treats.degrees_of_freedom, 3);
//! assert!(treats.p_value.unwrap() < 0.01);
//!
//! println!("{table}");
//! ```
//!
//! ## Notation
//!
//! - **R**: raw row count, **C**: column count, **N** = R·C observations
//! - **CM**: correction for the mean, grand_total² / N
//! - **SS_group**: Σ (group_total² / group_size) − CM
//!
//! ## Features
//!
//! - `serde` (default): serialization of tables and configuration, and the
//!   `--json` output of the `anova` binary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod design;
pub mod error;
pub mod grid;
pub mod stats;
pub mod table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::design::{
        analyze, blocked_anova, correction_for_mean, group_ss, simple_anova, total_ss,
        twoway_anova, AnalysisConfig, Design,
    };
    pub use crate::error::{Error, Result};
    pub use crate::grid::{
        aggregate, read_grid, read_grid_from_path, sum_x, sum_xsq, Aggregated, Grid,
        ReaderConfig,
    };
    pub use crate::stats::f_survival;
    pub use crate::table::{
        render, AnovaTable, DesignWarning, RenderConfig, Source, SourceKind, HEADERS,
    };
}

// Re-export commonly used items at crate root
pub use design::{
    analyze, blocked_anova, group_ss, simple_anova, twoway_anova, AnalysisConfig, Design,
};
pub use error::{Error, Result};
pub use grid::{
    aggregate, read_grid, read_grid_from_path, sum_x, sum_xsq, Aggregated, Grid, ReaderConfig,
};
pub use stats::f_survival;
pub use table::{render, AnovaTable, DesignWarning, RenderConfig, Source, SourceKind, HEADERS};
