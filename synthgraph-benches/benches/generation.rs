//! Generation benchmarks for the three request paths.
//!
//! Component-constrained and direct requests are timed end to end,
//! including oracle validation and any retries. Power-law requests are
//! timed from degree sampling through stub matching.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use synthgraph_benches::{
    error::BenchSetupError,
    params::{ComponentBenchParams, DirectBenchParams, PowerLawBenchParams, SEED},
};
use synthgraph_core::{
    BalancingStrategy, DensityPreference, GraphType, generate_with_rng,
    power_law::generate_power_law_with_rng,
};

/// Vertex counts shared by the component and direct benchmarks.
const VERTEX_COUNTS: &[usize] = &[50, 200, 800];

fn component_generation_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("generate_components");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        for balancing in [BalancingStrategy::Random, BalancingStrategy::Balanced] {
            let params = ComponentBenchParams {
                graph_type: GraphType::Simple,
                vertex_count,
                component_count: 4,
                balancing,
            };
            let request = params.request()?;
            group.bench_with_input(BenchmarkId::from_parameter(&params), &request, |b, request| {
                let mut rng = SmallRng::seed_from_u64(SEED);
                b.iter(|| generate_with_rng(request, &mut rng));
            });
        }
    }

    group.finish();
    Ok(())
}

fn direct_generation_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("generate_direct");
    group.sample_size(20);

    for &vertex_count in VERTEX_COUNTS {
        for (graph_type, density) in [
            (GraphType::Simple, DensityPreference::Sparse),
            (GraphType::Simple, DensityPreference::Dense),
            (GraphType::PseudographDirected, DensityPreference::Sparse),
        ] {
            let params = DirectBenchParams {
                graph_type,
                vertex_count,
                density,
            };
            let request = params.request()?;
            group.bench_with_input(BenchmarkId::from_parameter(&params), &request, |b, request| {
                let mut rng = SmallRng::seed_from_u64(SEED);
                b.iter(|| generate_with_rng(request, &mut rng));
            });
        }
    }

    group.finish();
    Ok(())
}

fn power_law_generation_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("generate_power_law");
    group.sample_size(20);

    for &vertex_count in &[1_000, 10_000] {
        for graph_type in [GraphType::Simple, GraphType::MultigraphDirected] {
            let params = PowerLawBenchParams {
                graph_type,
                vertex_count,
                gamma: 2.5,
            };
            let request = params.request()?;
            group.bench_with_input(BenchmarkId::from_parameter(&params), &request, |b, request| {
                let mut rng = SmallRng::seed_from_u64(SEED);
                b.iter(|| generate_power_law_with_rng(request, &mut rng));
            });
        }
    }

    group.finish();
    Ok(())
}

fn component_generation(c: &mut Criterion) {
    if let Err(err) = component_generation_impl(c) {
        panic!("component generation benchmark setup failed: {err}");
    }
}

fn direct_generation(c: &mut Criterion) {
    if let Err(err) = direct_generation_impl(c) {
        panic!("direct generation benchmark setup failed: {err}");
    }
}

fn power_law_generation(c: &mut Criterion) {
    if let Err(err) = power_law_generation_impl(c) {
        panic!("power-law generation benchmark setup failed: {err}");
    }
}

criterion_group!(
    benches,
    component_generation,
    direct_generation,
    power_law_generation
);
criterion_main!(benches);
