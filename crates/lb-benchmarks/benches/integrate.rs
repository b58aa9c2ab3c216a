//! Benchmarks for the trapezoidal integrator
//!
//! Compares the left-to-right scalar rule used by the `integrate` program
//! against the four-lane `wide` variant.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lb_core::simd::integrate_f_lanes;
use lb_core::{integrate_f, Trapezoid, Workload};

fn bench_integrate_scalar_vs_lanes(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate_f");

    for n in [10u32, 1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("scalar", n), n, |b, &n| {
            b.iter(|| integrate_f(black_box(-100.0), black_box(100.0), black_box(n)))
        });

        group.bench_with_input(BenchmarkId::new("lanes", n), n, |b, &n| {
            b.iter(|| integrate_f_lanes(black_box(-100.0), black_box(100.0), black_box(n)))
        });
    }

    group.finish();
}

fn bench_reference_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate_program");
    let workload = Trapezoid::reference();

    group.bench_function(workload.name(), |b| b.iter(|| black_box(&workload).run()));

    group.finish();
}

criterion_group!(benches, bench_integrate_scalar_vs_lanes, bench_reference_workload);
criterion_main!(benches);
