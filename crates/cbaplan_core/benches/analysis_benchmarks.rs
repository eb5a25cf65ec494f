//! Criterion benchmarks for cbaplan_core analyses
//!
//! Run with: cargo bench -p cbaplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cbaplan_core::analysis::{break_even_table, monte_carlo, tornado};
use cbaplan_core::{DEFAULT_DISCOUNT_RATE, ProjectId, ScenarioFactors, scenario_npv};

fn bench_scenario_npv(c: &mut Criterion) {
    c.bench_function("scenario_npv", |b| {
        b.iter(|| {
            scenario_npv(
                black_box(ProjectId::HospitalSimulation),
                black_box(ScenarioFactors::new(0.9, 1.1, 1.05)),
                black_box(DEFAULT_DISCOUNT_RATE),
            )
        })
    });
}

fn bench_tornado(c: &mut Criterion) {
    c.bench_function("tornado", |b| {
        b.iter(|| tornado(black_box(DEFAULT_DISCOUNT_RATE)))
    });
}

fn bench_break_even(c: &mut Criterion) {
    c.bench_function("break_even_table", |b| b.iter(break_even_table));
}

fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(20);

    for n_samples in [1_000, 10_000, 50_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            &n_samples,
            |b, &n| b.iter(|| monte_carlo(black_box(n), black_box(0))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scenario_npv,
    bench_tornado,
    bench_break_even,
    bench_monte_carlo
);
criterion_main!(benches);
