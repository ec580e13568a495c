//! Criterion benchmarks for fanchart_core
//!
//! Run with: cargo bench -p fanchart_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fanchart_core::{SimulationParameters, generate_paths, summarize};

fn bench_generate_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_paths");
    for (years, paths) in [(5_usize, 100_usize), (20, 1_000)] {
        let params = SimulationParameters::from_percent(10_000.0, 7.0, 15.0, years, paths, 42);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{years}y_{paths}paths")),
            &params,
            |b, params| b.iter(|| generate_paths(black_box(params)).unwrap()),
        );
    }
    group.finish();
}

fn bench_summarize(c: &mut Criterion) {
    let params = SimulationParameters::from_percent(10_000.0, 7.0, 15.0, 20, 1_000, 42);
    let grid = generate_paths(&params).unwrap();

    c.bench_function("summarize_20y_1000paths", |b| {
        b.iter(|| summarize(black_box(&grid)))
    });
}

criterion_group!(benches, bench_generate_paths, bench_summarize);
criterion_main!(benches);
