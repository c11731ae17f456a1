//! Property-based tests for ladder construction

use proptest::prelude::*;
use spectrumlook::element::Element;
use spectrumlook::ladder::build_ladder;
use spectrumlook::peptide::{effective_length, ModificationTable};

fn annotation_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["a", "b", "c", "x", "y", "z"]),
        0usize..40,
        prop::sample::select(vec!["", "++", "+++", "-H2O", "-NH3", "++-NH3"]),
    )
        .prop_map(|(prefix, position, suffix)| {
            if position == 0 {
                format!("{}{}", prefix, suffix)
            } else {
                format!("{}{}{}", prefix, position, suffix)
            }
        })
}

fn element_strategy() -> impl Strategy<Value = Element> {
    (annotation_strategy(), 50.0f64..4000.0, any::<bool>())
        .prop_map(|(annotation, mz, matched)| Element::with_mz(annotation, mz, matched))
}

fn is_legacy_cell(text: &str) -> bool {
    match text.split_once('|') {
        Some((mz, matched)) => {
            let decimals = mz.split_once('.').map(|(_, d)| d.len());
            mz.parse::<f64>().is_ok() && decimals == Some(2) && (matched == "true" || matched == "false")
        }
        None => false,
    }
}

proptest! {
    /// Every row is exactly as long as the residue count
    #[test]
    fn test_rows_never_ragged(
        elements in prop::collection::vec(element_strategy(), 0..60),
        peptide in "[A-Z*@]{0,30}",
    ) {
        let modifications = ModificationTable::new().with('*', 79.9663).with('@', 15.9949);
        let ladder = build_ladder(&elements, &peptide, &modifications);
        let expected = peptide.chars().filter(|c| *c != '*' && *c != '@').count();

        prop_assert_eq!(ladder.effective_length(), expected);
        prop_assert_eq!(effective_length(&peptide, &modifications), expected);
        for row in ladder.rows() {
            prop_assert_eq!(row.cells.len(), expected);
        }
    }

    /// Cells are either blank or `<mz>|<true|false>`
    #[test]
    fn test_cells_well_formed(
        elements in prop::collection::vec(element_strategy(), 0..60),
        peptide in "[A-Z]{0,30}",
    ) {
        let ladder = build_ladder(&elements, &peptide, &ModificationTable::new());
        for row in ladder.to_legacy_rows() {
            for cell in row {
                prop_assert!(cell.is_empty() || is_legacy_cell(&cell), "bad cell {:?}", cell);
            }
        }
    }

    /// Series keys are unique and in first-seen order
    #[test]
    fn test_series_first_seen_order(
        elements in prop::collection::vec(element_strategy(), 0..60),
    ) {
        let ladder = build_ladder(&elements, "PEPTIDEPEPTIDE", &ModificationTable::new());

        let mut expected: Vec<String> = Vec::new();
        for element in &elements {
            let key = spectrumlook::annotation::parse_series_key(&element.annotation);
            if !expected.contains(&key) {
                expected.push(key);
            }
        }
        prop_assert_eq!(ladder.series_keys(), expected);
    }

    /// Positions past the peptide end never fill a cell
    #[test]
    fn test_out_of_range_dropped(position in 6usize..1000, mz in 50.0f64..4000.0) {
        let elements = vec![Element::with_mz(format!("y{}", position), mz, true)];
        let ladder = build_ladder(&elements, "PEPTI", &ModificationTable::new());
        let row = ladder.row("y").unwrap();
        prop_assert_eq!(row.cells.len(), 5);
        prop_assert_eq!(row.filled_count(), 0);
    }
}
