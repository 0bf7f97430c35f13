//! Benchmark for container combination and name-based dispatch.
//!
//! Compares folding through the typed traits with the same fold through the
//! guarded dynamic layer, and measures capability resolution by name.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lawful::container::{All, Container, First, Kind, Unit};
use lawful::dispatch::resolve;
use lawful::typeclass::Monoid;
use lawful::value::Value;
use std::hint::black_box;

// =============================================================================
// 1. Typed Folds
// =============================================================================

/// Absent for the first half of the range, present after it.
fn first_at(index: i32, size: i32) -> First {
    if index < size / 2 {
        First::nothing()
    } else {
        First::new(index)
    }
}

fn benchmark_typed_concat_all(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("typed_concat_all");

    for size in [10, 100, 1000] {
        let alls: Vec<All> = (0..size).map(|index| All::new(index % 7 != 0)).collect();
        let firsts: Vec<First> = (0..size).map(|index| first_at(index, size)).collect();

        group.bench_with_input(BenchmarkId::new("all", size), &alls, |bencher, alls| {
            bencher.iter(|| black_box(All::concat_all(alls.iter().copied())));
        });

        group.bench_with_input(
            BenchmarkId::new("first", size),
            &firsts,
            |bencher, firsts| {
                bencher.iter(|| black_box(First::concat_all(firsts.iter().cloned())));
            },
        );
    }

    group.finish();
}

// =============================================================================
// 2. Guarded Folds
// =============================================================================

fn benchmark_guarded_concat(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("guarded_concat");

    for size in [10, 100, 1000] {
        let operands: Vec<Value> = (0..size)
            .map(|index| Value::from(All::new(index % 7 != 0)))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &operands,
            |bencher, operands| {
                bencher.iter(|| {
                    let empty = Kind::All.empty();
                    operands
                        .iter()
                        .try_fold(empty, |accumulator: Container, operand| {
                            accumulator.concat(black_box(operand))
                        })
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// 3. Name Dispatch
// =============================================================================

fn benchmark_dispatch(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("dispatch");
    let unit = Container::from(Unit);
    let arguments = [Value::function(|value| value)];

    for name in ["map", "fantasy-land/map", "fantasy-land/inspect"] {
        group.bench_function(BenchmarkId::new("resolve", name), |bencher| {
            bencher.iter(|| black_box(resolve(Kind::Unit, black_box(name))));
        });

        group.bench_function(BenchmarkId::new("invoke", name), |bencher| {
            bencher.iter(|| black_box(unit.invoke(black_box(name), &arguments)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_typed_concat_all,
    benchmark_guarded_concat,
    benchmark_dispatch
);
criterion_main!(benches);
