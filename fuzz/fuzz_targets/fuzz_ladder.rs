#![no_main]

use libfuzzer_sys::fuzz_target;
use spectrumlook::element::Element;
use spectrumlook::ladder::build_ladder;
use spectrumlook::peptide::{ModificationTable, DEFAULT_MODIFICATION_MARKERS};

fuzz_target!(|data: &[u8]| {
    let text = match std::str::from_utf8(data) {
        Ok(text) => text,
        Err(_) => return,
    };

    // First line is the peptide, each further line an annotation
    let mut lines = text.lines();
    let peptide = lines.next().unwrap_or("");
    let elements: Vec<Element> = lines
        .enumerate()
        .map(|(i, annotation)| Element::with_mz(annotation, i as f64, i % 2 == 0))
        .collect();

    let modifications = ModificationTable::from_markers(DEFAULT_MODIFICATION_MARKERS);
    let ladder = build_ladder(&elements, peptide, &modifications);

    // Rows are never ragged, whatever the input
    for row in ladder.rows() {
        assert_eq!(row.cells.len(), ladder.effective_length());
    }
});
