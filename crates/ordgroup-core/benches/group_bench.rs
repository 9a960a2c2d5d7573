//! Benchmarks for linear and indexed groups.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ordgroup_core::{Group, IndexedGroup};
use std::hint::black_box;

const SIZES: [u64; 3] = [16, 256, 2048];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("linear", size), &size, |b, &size| {
            b.iter(|| Group::from_items(black_box(0..size)));
        });
        group.bench_with_input(BenchmarkId::new("indexed", size), &size, |b, &size| {
            b.iter(|| IndexedGroup::from_items(black_box(0..size)));
        });
    }
    group.finish();
}

fn bench_has(c: &mut Criterion) {
    let mut group = c.benchmark_group("has");
    for size in SIZES {
        let linear = Group::from_items(0..size);
        let indexed = IndexedGroup::from_items(0..size);
        let probe = size.saturating_sub(1);

        group.bench_with_input(BenchmarkId::new("linear", size), &probe, |b, probe| {
            b.iter(|| linear.has(black_box(probe)));
        });
        group.bench_with_input(BenchmarkId::new("indexed", size), &probe, |b, probe| {
            b.iter(|| indexed.has(black_box(probe)));
        });
    }
    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let members = Group::from_items(0..2048u64);
    c.bench_function("iterate_2048", |b| {
        b.iter(|| members.iter().copied().fold(0u64, u64::wrapping_add));
    });
}

criterion_group!(benches, bench_build, bench_has, bench_iterate);
criterion_main!(benches);
