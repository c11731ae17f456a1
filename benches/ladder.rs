use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spectrumlook::element::Element;
use spectrumlook::ladder::build_ladder;
use spectrumlook::peptide::{ModificationTable, DEFAULT_MODIFICATION_MARKERS};
use spectrumlook::series::FragmentationMode;

/// Theoretical ions for every CID series at every position of the peptide
fn create_elements(peptide_length: usize) -> Vec<Element> {
    let catalog = FragmentationMode::Cid.series_catalog();
    let mut elements = Vec::with_capacity(catalog.len() * peptide_length);
    for series in catalog {
        let (prefix, suffix) = series.split_at(1);
        for position in 1..=peptide_length {
            let annotation = format!("{}{}{}", prefix, position, suffix);
            let mz = 100.0 + position as f64 * 110.05;
            elements.push(Element::with_mz(annotation, mz, position % 3 == 0));
        }
    }
    elements
}

/// Benchmark ladder construction for growing peptides
fn bench_build_ladder(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_ladder");
    let modifications = ModificationTable::from_markers(DEFAULT_MODIFICATION_MARKERS);

    for peptide_length in [10, 30, 60] {
        let elements = create_elements(peptide_length);
        let peptide: String = "PEPTIDEK".chars().cycle().take(peptide_length).collect();

        group.throughput(Throughput::Elements(elements.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}residues", peptide_length)),
            &elements,
            |b, elements| {
                b.iter(|| build_ladder(black_box(elements), black_box(&peptide), &modifications))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build_ladder);
criterion_main!(benches);
