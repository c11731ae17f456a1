//! Fragment ladder: one row per ion series, one cell per residue position.
//!
//! A ladder is built from annotated fragment ions and the peptide they were
//! generated from:
//!
//! ```
//! use spectrumlook::element::Element;
//! use spectrumlook::ladder::build_ladder;
//! use spectrumlook::peptide::ModificationTable;
//!
//! let elements = vec![
//!     Element::with_mz("b1", 98.06, true),
//!     Element::with_mz("b2", 227.10, false),
//!     Element::with_mz("y1", 148.06, true),
//! ];
//! let ladder = build_ladder(&elements, "PEPTIDE", &ModificationTable::new());
//!
//! assert_eq!(ladder.series_keys(), vec!["b", "y"]);
//! assert_eq!(ladder.rows()[0].legacy_cells()[..3], ["98.06|true", "227.10|false", ""]);
//! ```
//!
//! Series appear in the order their first element was seen. Cells hold a
//! structured [`LadderCell`]; the pipe-delimited text used by older
//! consumers is only produced on request.

mod builder;
mod cell;
pub mod render;


pub use builder::build_ladder;
#[cfg(feature = "parallel")]
pub use builder::build_ladders_parallel;
pub use cell::{legacy_cell_text, parse_legacy_cell, CellParseError, LadderCell, LEGACY_SEPARATOR};
pub use render::LadderTable;

use serde::Serialize;

/// All cells of one ion series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LadderRow {
    /// Ion series identifier (e.g. `b++`)
    pub series_key: String,
    /// One slot per residue position, index `p - 1` for position `p`
    pub cells: Vec<Option<LadderCell>>,
}

impl LadderRow {
    pub(crate) fn empty(series_key: String, length: usize) -> Self {
        Self {
            series_key,
            cells: vec![None; length],
        }
    }

    /// Cell at a 1-based residue position
    pub fn at_position(&self, position: usize) -> Option<&LadderCell> {
        position
            .checked_sub(1)
            .and_then(|index| self.cells.get(index))
            .and_then(Option::as_ref)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cells whose fragment was matched
    pub fn matched_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.matched).count()
    }

    /// Cells as `<mz>|<matched>` strings, `""` for empty slots
    pub fn legacy_cells(&self) -> Vec<String> {
        self.cells.iter().map(|c| legacy_cell_text(c.as_ref())).collect()
    }
}

/// A fragment ladder for one peptide
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LadderInstance {
    peptide: String,
    effective_length: usize,
    rows: Vec<LadderRow>,
}

impl LadderInstance {
    /// Peptide the ladder was built from, markers included
    pub fn peptide(&self) -> &str {
        &self.peptide
    }

    /// Residue count, which is also the length of every row
    pub fn effective_length(&self) -> usize {
        self.effective_length
    }

    /// Rows in first-seen order
    pub fn rows(&self) -> &[LadderRow] {
        &self.rows
    }

    /// Series keys parallel to [`rows`](Self::rows)
    pub fn series_keys(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.series_key.as_str()).collect()
    }

    /// Row for a series key
    pub fn row(&self, series_key: &str) -> Option<&LadderRow> {
        self.rows.iter().find(|r| r.series_key == series_key)
    }

    /// Rows for the requested series in request order; unknown keys are skipped
    pub fn select<S: AsRef<str>>(&self, series_keys: &[S]) -> Vec<&LadderRow> {
        series_keys.iter().filter_map(|k| self.row(k.as_ref())).collect()
    }

    /// Whether the ladder has no series
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of series
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// All rows in legacy text form, parallel to [`series_keys`](Self::series_keys)
    pub fn to_legacy_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(LadderRow::legacy_cells).collect()
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
