//! Plain-text rendering of ANOVA tables.

use comfy_table::{presets::ASCII_MARKDOWN, Cell, CellAlignment, Row, Table};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::AnovaTable;

/// Column headers of a rendered table.
pub const HEADERS: [&str; 6] = ["source", "DF", "SS", "MS", "F", "p"];

/// Configuration for table rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Decimal places for SS, MS, F and p (default: 4).
    pub precision: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { precision: 4 }
    }
}

/// Render a table as text.
///
/// One row per source in table order. Cells without a value (MS for total,
/// F and p for error and total) are left blank. Any design warnings follow
/// the table, one per line.
#[must_use]
pub fn render(table: &AnovaTable, config: &RenderConfig) -> String {
    let mut out = Table::new();
    out.load_preset(ASCII_MARKDOWN);
    out.set_header(HEADERS.to_vec());

    for source in table.sources() {
        let mut row = Row::new();
        row.add_cell(Cell::new(source.kind.label()).set_alignment(CellAlignment::Left));
        row.add_cell(
            Cell::new(source.degrees_of_freedom.to_string()).set_alignment(CellAlignment::Right),
        );
        row.add_cell(number_cell(
            Some(source.sum_of_squares),
            config.precision,
            false,
        ));
        row.add_cell(number_cell(source.mean_square, config.precision, false));
        row.add_cell(number_cell(source.f_ratio, config.precision, false));
        row.add_cell(number_cell(source.p_value, config.precision, true));
        out.add_row(row);
    }

    let mut text = out.to_string();
    for warning in table.warnings() {
        text.push_str("\nwarning: ");
        text.push_str(&warning.to_string());
    }
    text
}

fn number_cell(value: Option<f64>, precision: usize, probability: bool) -> Cell {
    let text = value.map_or_else(String::new, |v| format_number(v, precision, probability));
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Fixed-point formatting; probabilities too small to show switch to
/// scientific notation so they never read as zero.
fn format_number(value: f64, precision: usize, probability: bool) -> String {
    let smallest = 10_f64.powi(-i32::try_from(precision).unwrap_or(i32::MAX));
    if probability && value > 0.0 && value < smallest {
        format!("{value:.precision$e}")
    } else {
        format!("{value:.precision$}")
    }
}
