use country_search_core::loader::BundledSource;
use country_search_core::{ActiveMode, NameFilterStore};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_set_query(c: &mut Criterion) {
    let mut store = NameFilterStore::load(BundledSource).expect("bundled list");

    c.bench_function("set_query single letter", |b| {
        b.iter(|| store.set_query(black_box("a")).len())
    });

    c.bench_function("set_query typed word", |b| {
        b.iter(|| {
            // One recompute per keystroke, as a host would issue them.
            for q in ["g", "gu", "gui", "guin", "guine", "guinea"] {
                black_box(store.set_query(black_box(q)).len());
            }
        })
    });

    store.set_query("land");
    c.bench_function("name_at every row", |b| {
        b.iter(|| {
            let mode = ActiveMode::Searching;
            (0..store.count(mode))
                .filter_map(|i| store.name_at(mode, i).ok())
                .map(str::len)
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_set_query);
criterion_main!(benches);
