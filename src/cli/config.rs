//! TOML configuration file support.
//!
//! Modification markers and the ion series to display can be kept in a
//! config file instead of being passed on every run:
//!
//! ```toml
//! # spectrumlook.toml
//! [ladder]
//! mode = "cid"
//! series = ["b", "b++", "y", "y++"]
//!
//! [modifications]
//! "*" = 79.9663
//! "@" = 15.9949
//! ```

use anyhow::{bail, Context, Result};
use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use spectrumlook::peptide::ModificationTable;
use spectrumlook::series::FragmentationMode;

/// Root configuration structure for spectrumlook.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Ladder display settings.
    #[serde(default)]
    pub ladder: LadderConfig,

    /// Modification markers and their mass deltas.
    #[serde(default)]
    pub modifications: BTreeMap<String, f64>,
}

/// Settings for which series are shown.
#[derive(Debug, Default, Deserialize)]
pub struct LadderConfig {
    /// Fragmentation mode deciding the series catalog.
    pub mode: Option<FragmentationMode>,

    /// Series to display, in display order.
    pub series: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML configuration")?;
        config.modification_table()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Modification markers as a lookup table.
    pub fn modification_table(&self) -> Result<ModificationTable> {
        let mut table = ModificationTable::new();
        for (key, mass) in &self.modifications {
            let mut chars = key.chars();
            let marker = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => bail!("Modification marker must be a single character: {:?}", key),
            };
            if marker.is_ascii_alphabetic() {
                warn!("Modification marker {:?} is a letter and will hide that residue", marker);
            }
            table.insert(marker, *mass);
        }
        Ok(table)
    }

    /// Series to display: explicit list, else the mode's default selection.
    pub fn series_selection(&self, mode: FragmentationMode) -> Vec<String> {
        match &self.ladder.series {
            Some(series) => series.clone(),
            None => mode.default_selection().into_iter().map(String::from).collect(),
        }
    }
}
