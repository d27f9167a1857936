//! Benchmark for store validation.
//!
//! Measures single-store construction for the success path and for the
//! accumulating failure path, plus batch validation of many inputs.
//! The parallel batch variant requires the `rayon` feature.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stella_domain::domain::store::{UnvalidatedStore, create_store, validate_stores};
use stella_domain::validation::{FormatRule, FormatRules};

const VALID_RAW: &str = "0123456789abcdef0123456789abcdef";

fn inputs(size: usize) -> Vec<UnvalidatedStore> {
    (0..size)
        .map(|index| {
            if index % 4 == 0 {
                UnvalidatedStore::new(Some(format!("short-{index}")), None, None)
            } else {
                UnvalidatedStore::new(
                    Some(VALID_RAW.to_string()),
                    Some(VALID_RAW.to_string()),
                    Some(VALID_RAW.to_string()),
                )
            }
        })
        .collect()
}

// =============================================================================
// Single Store Benchmarks
// =============================================================================

fn benchmark_create_store(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("create_store");

    group.bench_function("all_valid", |bencher| {
        bencher.iter(|| {
            create_store(
                black_box(Some(VALID_RAW)),
                black_box(Some(VALID_RAW)),
                black_box(Some(VALID_RAW)),
            )
        });
    });

    group.bench_function("all_invalid", |bencher| {
        bencher.iter(|| create_store(black_box(None), black_box(Some("short")), black_box(Some(" "))));
    });

    group.finish();
}

fn benchmark_rule_kinds(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("format_rule");

    let pattern = FormatRule::placeholder();
    let predicate = FormatRule::predicate("32 lowercase alphanumerics", |value| {
        value.len() == 32
            && value
                .bytes()
                .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit())
    });

    group.bench_function("pattern", |bencher| {
        bencher.iter(|| pattern.is_satisfied_by(black_box(VALID_RAW)));
    });

    group.bench_function("predicate", |bencher| {
        bencher.iter(|| predicate.is_satisfied_by(black_box(VALID_RAW)));
    });

    group.finish();
}

// =============================================================================
// Batch Benchmarks
// =============================================================================

fn benchmark_validate_stores(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("validate_stores");
    group.sample_size(50);

    let rules = FormatRules::default();

    for size in [100, 1_000, 10_000] {
        let batch = inputs(size);

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |bencher, _| {
            bencher.iter(|| black_box(validate_stores(&rules, &batch)));
        });

        #[cfg(feature = "rayon")]
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bencher, _| {
            bencher.iter(|| {
                black_box(stella_domain::domain::store::validate_stores_par(
                    &rules, &batch,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_create_store,
    benchmark_rule_kinds,
    benchmark_validate_stores,
);

criterion_main!(benches);
