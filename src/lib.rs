//! # SpectrumLook - Fragment Ladders for MS/MS Spectra
//!
//! `spectrumlook` builds the fragment ladder used to inspect a peptide-spectrum
//! match: one row per ion series (b, b++, y-NH3, ...), one column per residue,
//! each cell holding the m/z of the theoretical fragment and whether it was
//! observed in the spectrum.
//!
//! ## Quick Start
//!
//! ```rust
//! use spectrumlook::element::Element;
//! use spectrumlook::ladder::{build_ladder, LadderTable};
//! use spectrumlook::peptide::ModificationTable;
//!
//! let modifications = ModificationTable::new().with('*', 79.9663);
//! let elements = vec![
//!     Element::with_mz("b1", 98.06, true),
//!     Element::with_mz("b2", 307.07, false),
//!     Element::with_mz("y1", 148.06, true),
//! ];
//!
//! let ladder = build_ladder(&elements, "PE*PTIDE", &modifications);
//! assert_eq!(ladder.effective_length(), 7);
//! assert_eq!(ladder.series_keys(), vec!["b", "y"]);
//!
//! let table = LadderTable::new(&ladder, &["b", "y"], &modifications);
//! println!("{}", table);
//! ```
//!
//! ## Architecture
//!
//! - [`annotation`]: splits `b14++` into series `b++` and position `14`
//! - [`ladder`]: ladder construction, legacy cell text and table rendering
//! - [`peptide`]: modification markers, residue counting and labels
//! - [`series`]: ion series catalogs per fragmentation mode
//! - [`session`]: original ladder plus user-edited variants
//! - [`input`]: element tables from upstream matchers
//!
//! Ladder construction never fails: malformed annotations and positions
//! outside the peptide leave cells empty instead of raising errors.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod annotation;
pub mod element;
pub mod input;
pub mod ladder;
pub mod peptide;
pub mod series;
pub mod session;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::annotation::{parse_annotation, parse_residue_position, parse_series_key, ParsedAnnotation};
    pub use crate::element::Element;
    pub use crate::input::{ElementSource, InputError, TsvElementReader};
    pub use crate::ladder::{build_ladder, LadderCell, LadderInstance, LadderRow, LadderTable};
    pub use crate::peptide::{
        effective_length, normalize_peptide_input, residue_labels, ModificationTable,
        DEFAULT_MODIFICATION_MARKERS,
    };
    pub use crate::series::{split_by_terminus, terminus_of, FragmentationMode, Terminus};
    pub use crate::session::{LadderSession, SessionError};
}
