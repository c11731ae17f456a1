use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between m/z and match flag in the legacy cell text
pub const LEGACY_SEPARATOR: char = '|';

/// Errors that can occur when reading a legacy cell string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellParseError {
    /// The `|` separator is missing
    #[error("Missing '|' separator in ladder cell: {0:?}")]
    MissingSeparator(String),

    /// The m/z part is not a finite number
    #[error("Invalid m/z in ladder cell: {0:?}")]
    InvalidMz(String),

    /// The match flag is not `true` or `false`
    #[error("Invalid match flag in ladder cell: {0:?}")]
    InvalidMatched(String),
}

/// A filled ladder slot: the fragment m/z and whether it was observed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderCell {
    /// Mass-to-charge ratio of the fragment
    pub mz: f64,
    /// Whether the fragment was matched to a peak
    pub matched: bool,
}

impl LadderCell {
    /// Create a new cell; `mz` is expected to be finite
    pub fn new(mz: f64, matched: bool) -> Self {
        debug_assert!(mz.is_finite(), "ladder cell m/z must be finite, got {}", mz);
        Self { mz, matched }
    }

    /// m/z with two fixed decimals.
    ///
    /// Uses Rust's float formatting, which rounds the exact binary value and
    /// breaks exact ties towards the even digit.
    pub fn formatted_mz(&self) -> String {
        format!("{:.2}", self.mz)
    }

    /// Render as `<mz>|<true|false>`
    pub fn to_legacy_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LadderCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}{}{}", self.mz, LEGACY_SEPARATOR, self.matched)
    }
}

impl FromStr for LadderCell {
    type Err = CellParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mz, matched) = s
            .split_once(LEGACY_SEPARATOR)
            .ok_or_else(|| CellParseError::MissingSeparator(s.to_string()))?;

        let mz: f64 = mz
            .trim()
            .parse()
            .map_err(|_| CellParseError::InvalidMz(mz.to_string()))?;
        if !mz.is_finite() {
            return Err(CellParseError::InvalidMz(s.to_string()));
        }

        let matched = match matched.trim() {
            "true" => true,
            "false" => false,
            other => return Err(CellParseError::InvalidMatched(other.to_string())),
        };

        Ok(Self { mz, matched })
    }
}

/// Legacy text of an optional cell; empty slots and non-finite m/z become `""`
pub fn legacy_cell_text(cell: Option<&LadderCell>) -> String {
    cell.filter(|c| c.mz.is_finite())
        .map(LadderCell::to_legacy_string)
        .unwrap_or_default()
}

/// Read a legacy cell string; `""` is an empty slot
pub fn parse_legacy_cell(text: &str) -> Result<Option<LadderCell>, CellParseError> {
    if text.is_empty() {
        Ok(None)
    } else {
        text.parse().map(Some)
    }
}
