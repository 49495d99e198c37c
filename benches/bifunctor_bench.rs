//! Benchmark for Bifunctor type class operations.
//!
//! Compares Bifunctor methods on `CachedRemoteData` against the inherent
//! `map_both` and a manual match.

use cached_remote_data::remote::CachedRemoteData;
use cached_remote_data::typeclass::Bifunctor;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// =============================================================================
// CachedRemoteData Bifunctor Benchmarks
// =============================================================================

fn benchmark_cached_bimap(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cached_bimap");

    group.bench_function("bifunctor_bimap_stale", |bencher| {
        bencher.iter(|| {
            let cached: CachedRemoteData<String, i32> =
                CachedRemoteData::Stale("error".to_string(), 42);
            black_box(cached.bimap(|e| e.len(), |x| x * 2))
        });
    });

    group.bench_function("inherent_map_both_stale", |bencher| {
        bencher.iter(|| {
            let cached: CachedRemoteData<String, i32> =
                CachedRemoteData::Stale("error".to_string(), 42);
            black_box(cached.map_both(|x| x * 2, |e| e.len()))
        });
    });

    group.bench_function("manual_match_stale", |bencher| {
        bencher.iter(|| {
            let cached: CachedRemoteData<String, i32> =
                CachedRemoteData::Stale("error".to_string(), 42);
            let mapped: CachedRemoteData<usize, i32> = match cached {
                CachedRemoteData::NotAsked => CachedRemoteData::NotAsked,
                CachedRemoteData::Loading => CachedRemoteData::Loading,
                CachedRemoteData::Failure(error) => CachedRemoteData::Failure(error.len()),
                CachedRemoteData::Success(value) => CachedRemoteData::Success(value * 2),
                CachedRemoteData::Refreshing(value) => CachedRemoteData::Refreshing(value * 2),
                CachedRemoteData::Stale(error, value) => {
                    CachedRemoteData::Stale(error.len(), value * 2)
                }
            };
            black_box(mapped)
        });
    });

    group.finish();
}

fn benchmark_cached_first_second(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cached_first_second");

    group.bench_function("bifunctor_first", |bencher| {
        bencher.iter(|| {
            let cached: CachedRemoteData<String, i32> = CachedRemoteData::Failure("error".to_string());
            black_box(cached.first(|e| e.len()))
        });
    });

    group.bench_function("inherent_map_error", |bencher| {
        bencher.iter(|| {
            let cached: CachedRemoteData<String, i32> = CachedRemoteData::Failure("error".to_string());
            black_box(cached.map_error(|e| e.len()))
        });
    });

    group.bench_function("bifunctor_second", |bencher| {
        bencher.iter(|| {
            let cached: CachedRemoteData<String, i32> = CachedRemoteData::Refreshing(42);
            black_box(cached.second(|x| x * 2))
        });
    });

    group.finish();
}

fn benchmark_bimap_ref(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cached_bimap_ref");

    let cached: CachedRemoteData<String, String> =
        CachedRemoteData::Stale("error".to_string(), "cached value".to_string());

    group.bench_function("bimap_ref", |bencher| {
        bencher.iter(|| black_box(cached.bimap_ref(String::len, String::len)));
    });

    group.bench_function("clone_then_bimap", |bencher| {
        bencher.iter(|| black_box(cached.clone().bimap(|e| e.len(), |x| x.len())));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_cached_bimap,
    benchmark_cached_first_second,
    benchmark_bimap_ref,
);

criterion_main!(benches);
