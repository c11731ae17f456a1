//! Theoretical fragment ions annotated with their match status.

use serde::{Deserialize, Serialize};

/// A theoretical fragment ion, matched or not against an observed peak
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Ion label such as `b14++` or `y7-NH3`
    pub annotation: String,
    /// Mass-to-charge ratio
    pub mz: f64,
    /// Observed intensity; carried through for display, never read by the ladder
    #[serde(default)]
    pub intensity: f64,
    /// Whether the theoretical ion was found in the spectrum
    pub matched: bool,
}

impl Element {
    /// Create a new element
    pub fn new(annotation: impl Into<String>, mz: f64, intensity: f64, matched: bool) -> Self {
        Self {
            annotation: annotation.into(),
            mz,
            intensity,
            matched,
        }
    }

    /// Create an element with zero intensity
    pub fn with_mz(annotation: impl Into<String>, mz: f64, matched: bool) -> Self {
        Self::new(annotation, mz, 0.0, matched)
    }
}
