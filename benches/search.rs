//! Performance benchmarks for similarity scoring and search.
//!
//! These benchmarks measure the two hot paths: the block-matching ratio on
//! its own, and a full query (suggestions, scoring, filtering, sort) over
//! the embedded catalog.

use car_search::{similarity_ratio, FuelType, SearchEngine, SearchFilters};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Benchmark the raw similarity ratio on a typical query/name pair.
fn bench_similarity_ratio(c: &mut Criterion) {
    c.bench_function("similarity_ratio", |b| {
        b.iter(|| similarity_ratio(black_box("swift"), black_box("maruti swift")));
    });
}

/// Benchmark a full unfiltered search over the catalog.
fn bench_search_unfiltered(c: &mut Criterion) {
    let engine = SearchEngine::with_demo_catalog();
    let filters = SearchFilters::default();

    c.bench_function("search_unfiltered", |b| {
        b.iter(|| engine.search(black_box("hyundai"), &filters));
    });
}

/// Benchmark a filtered search over the catalog.
fn bench_search_filtered(c: &mut Criterion) {
    let engine = SearchEngine::with_demo_catalog();
    let filters = SearchFilters {
        fuel: Some(FuelType::Diesel),
        min_year: Some(2019),
        ..Default::default()
    };

    c.bench_function("search_filtered", |b| {
        b.iter(|| engine.search(black_box("creta"), &filters));
    });
}

criterion_group!(
    benches,
    bench_similarity_ratio,
    bench_search_unfiltered,
    bench_search_filtered
);
criterion_main!(benches);
