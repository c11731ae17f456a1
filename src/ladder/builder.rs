use log::{debug, trace};

use super::{LadderCell, LadderInstance, LadderRow};
use crate::annotation::parse_annotation;
use crate::element::Element;
use crate::peptide::{effective_length, ModificationTable};

/// Build the fragment ladder for `peptide` from annotated fragment ions.
///
/// Rows are created in the order their series is first seen. Elements whose
/// position falls outside the peptide, or whose m/z is not finite, leave
/// their slot empty. Later elements overwrite earlier ones at the same slot.
pub fn build_ladder(
    elements: &[Element],
    peptide: &str,
    modifications: &ModificationTable,
) -> LadderInstance {
    let length = effective_length(peptide, modifications);
    let mut rows: Vec<LadderRow> = Vec::new();
    let mut skipped = 0usize;

    for element in elements {
        let parsed = parse_annotation(&element.annotation);

        let row_index = match rows.iter().position(|r| r.series_key == parsed.series_key) {
            Some(index) => index,
            None => {
                rows.push(LadderRow::empty(parsed.series_key, length));
                rows.len() - 1
            }
        };

        let slot = parsed
            .position
            .checked_sub(1)
            .filter(|&index| index < length);

        match slot {
            Some(index) if element.mz.is_finite() => {
                rows[row_index].cells[index] = Some(LadderCell::new(element.mz, element.matched));
            }
            Some(_) => {
                trace!("Non-finite m/z for {}, leaving cell empty", element.annotation);
                skipped += 1;
            }
            None => {
                trace!(
                    "Position {} of {} outside peptide of length {}",
                    parsed.position,
                    element.annotation,
                    length
                );
                skipped += 1;
            }
        }
    }

    debug!(
        "Built ladder for {}: {} series x {} residues from {} elements ({} skipped)",
        peptide,
        rows.len(),
        length,
        elements.len(),
        skipped
    );

    LadderInstance {
        peptide: peptide.to_string(),
        effective_length: length,
        rows,
    }
}

/// Build ladders for several peptide variants concurrently
#[cfg(feature = "parallel")]
pub fn build_ladders_parallel(
    variants: &[(Vec<Element>, String)],
    modifications: &ModificationTable,
) -> Vec<LadderInstance> {
    use rayon::prelude::*;

    variants
        .par_iter()
        .map(|(elements, peptide)| build_ladder(elements, peptide, modifications))
        .collect()
}
