//! Criterion micro-benchmarks for a single FTCS step.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rodheat_bench::{fine_profile, reference_profile, stress_profile};
use rodheat_stepper::{ftcs, Ftcs, Stepper};

/// Benchmark: one allocating step on the 20-point reference rod.
fn bench_step_reference(c: &mut Criterion) {
    let cfg = reference_profile();
    let params = cfg.params().unwrap();
    let state = cfg.initial_state().unwrap();

    c.bench_function("ftcs_step_20", |b| {
        b.iter(|| black_box(ftcs::step(black_box(&state), &params)));
    });
}

/// Benchmark: one in-place step into a reused buffer, 1001 points.
fn bench_step_into_fine(c: &mut Criterion) {
    let cfg = fine_profile(1);
    let params = cfg.params().unwrap();
    let state = cfg.initial_state().unwrap();
    let mut next = state.clone();

    c.bench_function("ftcs_step_into_1k", |b| {
        b.iter(|| {
            Ftcs.step(black_box(&state), next.interior_mut(), &params);
            black_box(&next);
        });
    });
}

/// Benchmark: one in-place step into a reused buffer, 100K points.
fn bench_step_into_stress(c: &mut Criterion) {
    let cfg = stress_profile(1);
    let params = cfg.params().unwrap();
    let state = cfg.initial_state().unwrap();
    let mut next = state.clone();

    c.bench_function("ftcs_step_into_100k", |b| {
        b.iter(|| {
            Ftcs.step(black_box(&state), next.interior_mut(), &params);
            black_box(&next);
        });
    });
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_step_into_fine,
    bench_step_into_stress
);
criterion_main!(benches);
