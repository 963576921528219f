//! Benchmark for the validation outcome type.
//!
//! Compares the fail-fast and accumulating combination paths over mixes of
//! valid and invalid inputs, and the cost of sequencing with flat_map.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use vetted::typeclass::{Applicative, Monad};
use vetted::user::{validate_user, validate_user_all};
use vetted::validated::Validated;

fn checked(value: i64) -> Validated<Vec<String>, i64> {
    if value > 0 {
        Validated::Valid(value)
    } else {
        Validated::Invalid(vec![String::from("must be positive")])
    }
}

// =============================================================================
// Combination Policy Benchmarks
// =============================================================================

fn benchmark_apply_policies(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("apply_policies");

    for (label, first, second) in [
        ("both_valid", 1_i64, 2_i64),
        ("first_invalid", 0, 2),
        ("both_invalid", 0, 0),
    ] {
        group.bench_with_input(
            BenchmarkId::new("fail_fast", label),
            &(first, second),
            |bencher, &(first, second)| {
                bencher.iter(|| {
                    let outcome = checked(black_box(first))
                        .map2(checked(black_box(second)), |a, b| a + b);
                    black_box(outcome)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("accumulating", label),
            &(first, second),
            |bencher, &(first, second)| {
                bencher.iter(|| {
                    let outcome = checked(black_box(first))
                        .map2_accumulating(checked(black_box(second)), |a, b| a + b);
                    black_box(outcome)
                });
            },
        );
    }

    group.finish();
}

fn benchmark_flat_map_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map_chain");

    for length in [4_i64, 16, 64] {
        group.bench_with_input(
            BenchmarkId::new("all_valid", length),
            &length,
            |bencher, &length| {
                bencher.iter(|| {
                    let mut outcome = checked(1);
                    for _ in 0..length {
                        outcome = outcome.flat_map(|value| checked(black_box(value)));
                    }
                    black_box(outcome)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// End-to-End Benchmarks
// =============================================================================

fn benchmark_user_assembly(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("user_assembly");

    group.bench_function("fail_fast_valid", |bencher| {
        bencher.iter(|| black_box(validate_user(black_box(1), black_box("email@test.com"))));
    });

    group.bench_function("fail_fast_both_invalid", |bencher| {
        bencher.iter(|| black_box(validate_user(black_box(0), black_box("emailtest.com"))));
    });

    group.bench_function("accumulating_valid", |bencher| {
        bencher.iter(|| black_box(validate_user_all(black_box(1), black_box("email@test.com"))));
    });

    group.bench_function("accumulating_both_invalid", |bencher| {
        bencher.iter(|| black_box(validate_user_all(black_box(0), black_box("emailtest.com"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_apply_policies,
    benchmark_flat_map_chain,
    benchmark_user_assembly
);
criterion_main!(benches);
