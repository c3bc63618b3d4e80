// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Performance Calculator Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use dam_engineering::scanner::{sample_designs, sweep_bottom_width, DesignBounds};
use dam_engineering::stability_map::StabilityMap;
use dam_engineering::{compute, rounded};
use dam_types::DamParameters;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    let params = DamParameters::default();

    group.bench_function("single", |b| {
        b.iter(|| black_box(compute(black_box(&params))))
    });

    group.bench_function("single_rounded", |b| {
        b.iter(|| black_box(rounded(&compute(black_box(&params)))))
    });

    group.finish();
}

fn bench_exploration(c: &mut Criterion) {
    let mut group = c.benchmark_group("exploration");
    let params = DamParameters::default();

    group.bench_function("sweep_1000", |b| {
        b.iter(|| black_box(sweep_bottom_width(&params, 10.0, 200.0, 1000).len()))
    });

    group.bench_function("stability_map_64x64", |b| {
        b.iter(|| {
            let map = StabilityMap::new(&params, (10.0, 200.0, 64), (1.0, 60.0, 64));
            black_box(map.classify())
        })
    });

    group.bench_function("sample_1000", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(11),
            |mut rng| black_box(sample_designs(&DesignBounds::default(), 1000, &mut rng).len()),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_compute, bench_exploration);
criterion_main!(benches);
