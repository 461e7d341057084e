//! Benchmarks comparing the plain pipeline against the precomputed/
//! memoized one, over a mixed workload of amount shapes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daxie_core::{convert, CachedConverter};

/// Amounts covering the interesting shapes: whole, fractional, gap zeros,
/// and the domain maximum.
const WORKLOAD: &[&str] = &[
    "0",
    "0.05",
    "1.23",
    "100.05",
    "1001.00",
    "10001.10",
    "123456.78",
    "100050000",
    "500000001.99",
    "999999999999.99",
];

fn bench_plain(c: &mut Criterion) {
    c.bench_function("convert/plain", |b| {
        b.iter(|| {
            for input in WORKLOAD {
                black_box(convert(black_box(input)).unwrap());
            }
        })
    });
}

fn bench_cached(c: &mut Criterion) {
    let converter = CachedConverter::new();
    c.bench_function("convert/cached", |b| {
        b.iter(|| {
            for input in WORKLOAD {
                black_box(converter.convert(black_box(input)).unwrap());
            }
        })
    });
}

fn bench_cached_cold(c: &mut Criterion) {
    c.bench_function("convert/cached-construction", |b| {
        b.iter(|| black_box(CachedConverter::new()))
    });
}

criterion_group!(benches, bench_plain, bench_cached, bench_cached_cold);
criterion_main!(benches);
