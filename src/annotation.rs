//! Fragment ion annotation parsing.
//!
//! An annotation such as `b14++` encodes the ion series (`b++`) and the
//! 1-based residue position (`14`). The first character always belongs to
//! the series prefix; the position is the run of digits starting at the
//! second character.

use serde::{Deserialize, Serialize};

/// Position returned when an annotation carries no residue number.
pub const NO_POSITION: usize = 0;

/// An annotation split into its series key and residue position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedAnnotation {
    /// Ion series with the residue number removed (e.g. `b++`)
    pub series_key: String,
    /// 1-based residue position, or [`NO_POSITION`]
    pub position: usize,
}

impl ParsedAnnotation {
    /// Whether a residue number was found in the annotation
    pub fn has_position(&self) -> bool {
        self.position != NO_POSITION
    }
}

/// Byte range of the digit run that starts right after the first character.
fn digit_run(annotation: &str) -> Option<(usize, usize)> {
    let first = annotation.chars().next()?;
    let start = first.len_utf8();
    let len = annotation[start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if len == 0 {
        None
    } else {
        Some((start, start + len))
    }
}

/// Strip the residue number out of an annotation, leaving the series key.
///
/// ```
/// use spectrumlook::annotation::parse_series_key;
///
/// assert_eq!(parse_series_key("b14++"), "b++");
/// assert_eq!(parse_series_key("y1"), "y");
/// assert_eq!(parse_series_key("b"), "b");
/// ```
pub fn parse_series_key(annotation: &str) -> String {
    match digit_run(annotation) {
        Some((start, end)) => {
            let mut key = String::with_capacity(annotation.len() - (end - start));
            key.push_str(&annotation[..start]);
            key.push_str(&annotation[end..]);
            key
        }
        None => annotation.to_string(),
    }
}

/// Read the residue number encoded in an annotation.
///
/// Returns [`NO_POSITION`] when no digits follow the first character or the
/// number does not fit in a `usize`.
pub fn parse_residue_position(annotation: &str) -> usize {
    digit_run(annotation)
        .and_then(|(start, end)| annotation[start..end].parse().ok())
        .unwrap_or(NO_POSITION)
}

/// Parse both parts of an annotation in one pass
pub fn parse_annotation(annotation: &str) -> ParsedAnnotation {
    match digit_run(annotation) {
        Some((start, end)) => ParsedAnnotation {
            series_key: [&annotation[..start], &annotation[end..]].concat(),
            position: annotation[start..end].parse().unwrap_or(NO_POSITION),
        },
        None => ParsedAnnotation {
            series_key: annotation.to_string(),
            position: NO_POSITION,
        },
    }
}
