//! Peptide sequences with single-character modification markers.
//!
//! A marker such as `*` in `PE*PTIDE` decorates the residue before it and
//! does not occupy a residue position of its own.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marker characters recognised by the SpectrumLook viewer
pub const DEFAULT_MODIFICATION_MARKERS: &str = "*+@!&#$%~`";

/// Mapping from modification marker to its mass delta
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModificationTable {
    masses: BTreeMap<char, f64>,
}

impl ModificationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from marker characters with zero mass deltas
    pub fn from_markers(markers: &str) -> Self {
        Self {
            masses: markers.chars().map(|c| (c, 0.0)).collect(),
        }
    }

    /// Add or replace a marker, returning the previous mass delta
    pub fn insert(&mut self, marker: char, mass: f64) -> Option<f64> {
        self.masses.insert(marker, mass)
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, marker: char, mass: f64) -> Self {
        self.masses.insert(marker, mass);
        self
    }

    /// Whether `c` is a modification marker
    pub fn contains(&self, c: char) -> bool {
        self.masses.contains_key(&c)
    }

    /// Mass delta of a marker
    pub fn mass(&self, marker: char) -> Option<f64> {
        self.masses.get(&marker).copied()
    }

    /// Iterate markers in character order
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.masses.iter().map(|(c, m)| (*c, *m))
    }

    /// Number of markers
    pub fn len(&self) -> usize {
        self.masses.len()
    }

    /// Whether the table has no markers
    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }
}

impl FromIterator<(char, f64)> for ModificationTable {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self {
            masses: iter.into_iter().collect(),
        }
    }
}

/// Number of residue positions in `peptide`, not counting modification markers
pub fn effective_length(peptide: &str, modifications: &ModificationTable) -> usize {
    peptide.chars().filter(|c| !modifications.contains(*c)).count()
}

/// One display label per residue, each residue followed by its markers.
///
/// Markers in front of the first residue are attached to that residue, so
/// the number of labels always equals [`effective_length`].
pub fn residue_labels(peptide: &str, modifications: &ModificationTable) -> Vec<String> {
    let mut labels: Vec<String> = Vec::with_capacity(peptide.len());
    let mut leading = String::new();

    for c in peptide.chars() {
        if modifications.contains(c) {
            match labels.last_mut() {
                Some(label) => label.push(c),
                None => leading.push(c),
            }
        } else {
            let mut label = String::with_capacity(2);
            label.push(c);
            if labels.is_empty() {
                label.push_str(&leading);
            }
            labels.push(label);
        }
    }

    labels
}

/// Clean up a peptide typed by a user.
///
/// Surrounding whitespace is removed and an all-lowercase entry is
/// upper-cased. Returns `None` for empty input.
pub fn normalize_peptide_input(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.chars().any(char::is_uppercase) {
        Some(trimmed.to_string())
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_length() {
        let mods = ModificationTable::new().with('*', 79.9663);
        assert_eq!(effective_length("PEPTIDE", &mods), 7);
        assert_eq!(effective_length("PE*PTIDE", &mods), 7);
        assert_eq!(effective_length("", &mods), 0);
        assert_eq!(effective_length("***", &mods), 0);
        assert_eq!(effective_length("PE*PTIDE", &ModificationTable::new()), 8);
    }

    #[test]
    fn test_default_markers() {
        let mods = ModificationTable::from_markers(DEFAULT_MODIFICATION_MARKERS);
        assert_eq!(mods.len(), 10);
        assert!(mods.contains('`'));
        assert_eq!(mods.mass('@'), Some(0.0));
        assert!(!mods.contains('M'));
    }

    #[test]
    fn test_residue_labels() {
        let mods = ModificationTable::new().with('*', 79.9663).with('@', 15.9949);
        assert_eq!(residue_labels("PE*PTIDE", &mods), vec!["P", "E*", "P", "T", "I", "D", "E"]);
        assert_eq!(residue_labels("M@*K", &mods), vec!["M@*", "K"]);
        assert_eq!(residue_labels("*PEP", &mods), vec!["P*", "E", "P"]);
        assert!(residue_labels("", &mods).is_empty());
        assert!(residue_labels("**", &mods).is_empty());
    }

    #[test]
    fn test_labels_match_effective_length() {
        let mods = ModificationTable::from_markers(DEFAULT_MODIFICATION_MARKERS);
        for peptide in ["PEPTIDE", "*P*E*", "M@K#R", "A"] {
            assert_eq!(residue_labels(peptide, &mods).len(), effective_length(peptide, &mods));
        }
    }

    #[test]
    fn test_normalize_peptide_input() {
        assert_eq!(normalize_peptide_input("peptide"), Some("PEPTIDE".to_string()));
        assert_eq!(normalize_peptide_input("  PEPtide "), Some("PEPtide".to_string()));
        assert_eq!(normalize_peptide_input("pe*p"), Some("PE*P".to_string()));
        assert_eq!(normalize_peptide_input("   "), None);
        assert_eq!(normalize_peptide_input(""), None);
    }
}
