use cartographer::{
    parse_cartographer_archive, write_cartographer_archive, AnnotationStore, BuildingType,
    FieldEdit, LatLng, MarkerRecord,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn build_synthetic_store(marker_count: usize) -> AnnotationStore {
    let mut store = AnnotationStore::new();

    let records = (0..marker_count)
        .map(|index| {
            let column = (index % 100) as f64;
            let row = (index / 100) as f64;
            let position = LatLng::new(41.80 + row * 0.0001, -72.25 + column * 0.0001);
            let mut record = MarkerRecord::partial(position);
            record.apply_edit(FieldEdit::Name(format!("Gebäude {index}")));
            record.apply_edit(FieldEdit::BuildingType(BuildingType::Academic));
            record.apply_edit(FieldEdit::Address(format!(
                "{index} Fairfield Way, Storrs, CT 06269"
            )));
            record.apply_edit(FieldEdit::SetHours {
                day: index % 7,
                open: "08:00".to_string(),
                close: "18:00".to_string(),
            });
            record
        })
        .collect();
    store.replace_all(records);

    store
}

fn bench_archive_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("archive_io");

    for &marker_count in &[100usize, 1_000usize] {
        let store = build_synthetic_store(marker_count);
        let json = write_cartographer_archive(store.snapshot()).expect("Export failed");

        group.bench_with_input(
            BenchmarkId::new("write", marker_count),
            &store,
            |b, store| {
                b.iter(|| {
                    let json =
                        write_cartographer_archive(black_box(store.snapshot())).expect("write");
                    black_box(json.len())
                })
            },
        );

        group.bench_with_input(BenchmarkId::new("parse", marker_count), &json, |b, json| {
            b.iter(|| {
                let records = parse_cartographer_archive(black_box(json)).expect("parse");
                black_box(records.len())
            })
        });
    }

    group.finish();
}

fn bench_position_lookup(c: &mut Criterion) {
    let store = build_synthetic_store(1_000);
    let probe = LatLng::new(41.80 + 9.0 * 0.0001, -72.25 + 99.0 * 0.0001);

    c.bench_function("store_find_1000", |b| {
        b.iter(|| black_box(store.find(black_box(probe)).is_some()))
    });
}

criterion_group!(benches, bench_archive_io, bench_position_lookup);
criterion_main!(benches);
