//! Benchmarks for factorial and Fibonacci.
//!
//! Compares the iterative implementations with the doubly recursive
//! definitions they replace.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wasmath_core::sequences::{self, naive};

fn bench_fibonacci(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");

    for n in [10, 20, 25] {
        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter(|| sequences::fibonacci(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, &n| {
            b.iter(|| naive::fibonacci(black_box(n)))
        });
    }

    group.finish();
}

fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");

    for n in [5, 12, 33] {
        group.bench_with_input(BenchmarkId::new("iterative", n), &n, |b, &n| {
            b.iter(|| sequences::factorial(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("naive", n), &n, |b, &n| {
            b.iter(|| naive::factorial(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fibonacci, bench_factorial);
criterion_main!(benches);
