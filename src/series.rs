//! Ion series catalogs for each fragmentation mode.
//!
//! Collision-induced dissociation produces b/y ions, electron-transfer
//! dissociation produces c/z ions. Each mode offers the same charge-state and
//! neutral-loss variants of its two base series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const CID_SERIES: [&str; 18] = [
    "b", "b++", "b+++", "b+++-H2O", "b+++-NH3", "b++-H2O", "b++-NH3", "b-H2O", "b-NH3",
    "y", "y++", "y+++", "y+++-H2O", "y+++-NH3", "y++-H2O", "y++-NH3", "y-H2O", "y-NH3",
];

const ETD_SERIES: [&str; 18] = [
    "c", "c++", "c+++", "c+++-H2O", "c+++-NH3", "c++-H2O", "c++-NH3", "c-H2O", "c-NH3",
    "z", "z++", "z+++", "z+++-H2O", "z+++-NH3", "z++-H2O", "z++-NH3", "z-H2O", "z-NH3",
];

/// Catalog indices selected when a mode is first chosen
const DEFAULT_SELECTION: [usize; 4] = [0, 1, 9, 10];

/// Fragmentation method, which decides the available ion series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentationMode {
    /// Collision-induced dissociation (b/y ions)
    #[default]
    Cid,
    /// Electron-transfer dissociation (c/z ions)
    Etd,
}

impl FragmentationMode {
    /// All ion series selectable in this mode, N-terminal series first
    pub fn series_catalog(&self) -> &'static [&'static str] {
        match self {
            FragmentationMode::Cid => &CID_SERIES,
            FragmentationMode::Etd => &ETD_SERIES,
        }
    }

    /// Singly and doubly charged base series of both termini
    pub fn default_selection(&self) -> Vec<&'static str> {
        let catalog = self.series_catalog();
        DEFAULT_SELECTION.iter().map(|&i| catalog[i]).collect()
    }

    /// Whether `series_key` belongs to this mode's catalog
    pub fn offers(&self, series_key: &str) -> bool {
        self.series_catalog().contains(&series_key)
    }
}

impl fmt::Display for FragmentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentationMode::Cid => write!(f, "cid"),
            FragmentationMode::Etd => write!(f, "etd"),
        }
    }
}

impl FromStr for FragmentationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cid" => Ok(FragmentationMode::Cid),
            "etd" => Ok(FragmentationMode::Etd),
            _ => Err(format!("Unknown fragmentation mode: {}. Valid options: cid, etd", s)),
        }
    }
}

/// Peptide terminus a fragment series retains
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terminus {
    /// a, b and c ions
    N,
    /// x, y and z ions
    C,
}

/// Classify a series key by its leading ion type
pub fn terminus_of(series_key: &str) -> Option<Terminus> {
    match series_key.chars().next()? {
        'a' | 'b' | 'c' => Some(Terminus::N),
        'x' | 'y' | 'z' => Some(Terminus::C),
        _ => None,
    }
}

/// Split a selection at the end of its leading run of N-terminal series.
///
/// The first half is drawn in front of the residue column and the second
/// half after it.
pub fn split_by_terminus<'a, S: AsRef<str>>(selection: &'a [S]) -> (&'a [S], &'a [S]) {
    let boundary = selection
        .iter()
        .position(|key| terminus_of(key.as_ref()) != Some(Terminus::N))
        .unwrap_or(selection.len());
    selection.split_at(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        assert_eq!("cid".parse::<FragmentationMode>().unwrap(), FragmentationMode::Cid);
        assert_eq!("ETD".parse::<FragmentationMode>().unwrap(), FragmentationMode::Etd);
        assert!("hcd".parse::<FragmentationMode>().is_err());
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(FragmentationMode::Cid.to_string(), "cid");
        assert_eq!(FragmentationMode::Etd.to_string(), "etd");
    }

    #[test]
    fn test_default_selection() {
        assert_eq!(FragmentationMode::Cid.default_selection(), vec!["b", "b++", "y", "y++"]);
        assert_eq!(FragmentationMode::Etd.default_selection(), vec!["c", "c++", "z", "z++"]);
    }

    #[test]
    fn test_catalog() {
        let cid = FragmentationMode::Cid;
        assert_eq!(cid.series_catalog().len(), 18);
        assert!(cid.offers("y++-NH3"));
        assert!(!cid.offers("z"));
        assert!(FragmentationMode::Etd.offers("c-H2O"));
    }

    #[test]
    fn test_terminus_of() {
        assert_eq!(terminus_of("b++"), Some(Terminus::N));
        assert_eq!(terminus_of("c-NH3"), Some(Terminus::N));
        assert_eq!(terminus_of("y"), Some(Terminus::C));
        assert_eq!(terminus_of("z+++"), Some(Terminus::C));
        assert_eq!(terminus_of("M"), None);
        assert_eq!(terminus_of(""), None);
    }

    #[test]
    fn test_split_by_terminus() {
        let selection = ["b", "b++", "y", "y++"];
        let (n, c) = split_by_terminus(&selection);
        assert_eq!(n, ["b", "b++"]);
        assert_eq!(c, ["y", "y++"]);

        let only_n = ["c", "c++"];
        let (n, c) = split_by_terminus(&only_n);
        assert_eq!(n.len(), 2);
        assert!(c.is_empty());

        let only_c = vec!["y".to_string()];
        let (n, c) = split_by_terminus(&only_c);
        assert!(n.is_empty());
        assert_eq!(c, ["y".to_string()]);

        let empty: [&str; 0] = [];
        let (n, c) = split_by_terminus(&empty);
        assert!(n.is_empty() && c.is_empty());
    }
}
