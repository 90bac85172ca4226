//! Property runners for generated graphs and allocation helpers.

use proptest::test_runner::{TestCaseError, TestCaseResult};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    BalancingStrategy, GenerationError, GenerationRequest, Mismatch, component, generate, oracle,
    power_law::balance,
};

/// Returns `true` when an exhausted component request can be blamed on the
/// parameters rather than on the builders.
///
/// Random splits of near-infeasible requests keep failing to allocate, and a
/// directed request whose components all fill up comes out symmetric. Every
/// other rejection means a builder produced a graph the oracle refused.
pub(super) fn exhaustion_is_expected(
    request: &GenerationRequest,
    last_mismatch: &Mismatch,
) -> bool {
    if request.component_count() == 0 {
        return false;
    }
    match last_mismatch {
        Mismatch::EmptyComponent { .. }
        | Mismatch::InsufficientEdges { .. }
        | Mismatch::TailOutOfBounds { .. } => {
            request.balancing() != BalancingStrategy::Balanced
        }
        Mismatch::TypeMismatch { .. } => request.graph_type().is_directed(),
        _ => false,
    }
}

/// Checks edge count, type and component count of an accepted graph.
///
/// Balanced splits may be infeasible and near-infeasible component requests
/// may exhaust their attempts; both are legitimate outcomes for a valid
/// request, so only accepted graphs are inspected. Exhaustion caused by a
/// rejected build still fails.
pub(super) fn run_generation_invariants(request: &GenerationRequest) -> TestCaseResult {
    let graph = match generate(request) {
        Ok(graph) => graph,
        Err(GenerationError::InfeasibleAllocation { .. })
            if request.balancing() == BalancingStrategy::Balanced =>
        {
            return Ok(());
        }
        Err(GenerationError::AttemptsExhausted { last_mismatch, .. })
            if exhaustion_is_expected(request, &last_mismatch) =>
        {
            return Ok(());
        }
        Err(err) => {
            return Err(TestCaseError::fail(format!(
                "generation failed: {err} (request={request:?})"
            )));
        }
    };

    if graph.edges().len() != request.edge_count() {
        return Err(TestCaseError::fail(format!(
            "expected {} edges, got {} (request={request:?})",
            request.edge_count(),
            graph.edges().len(),
        )));
    }

    let matrix = graph
        .adjacency()
        .map_err(|err| TestCaseError::fail(format!("edge out of range: {err}")))?;
    let classified = oracle::classify(&matrix);
    if classified != request.graph_type() {
        return Err(TestCaseError::fail(format!(
            "classified as {classified}, expected {} (request={request:?})",
            request.graph_type(),
        )));
    }

    if request.component_count() > 0 && !request.graph_type().is_directed() {
        let components = oracle::count_components(&matrix);
        if components != request.component_count() {
            return Err(TestCaseError::fail(format!(
                "found {components} components, expected {} (request={request:?})",
                request.component_count(),
            )));
        }
    }
    Ok(())
}

/// Checks that equal requests yield equal outcomes.
pub(super) fn run_determinism(request: &GenerationRequest) -> TestCaseResult {
    let first = generate(request);
    let second = generate(request);
    if first != second {
        return Err(TestCaseError::fail(format!(
            "outcomes diverged for request={request:?}"
        )));
    }
    Ok(())
}

/// Checks that a balanced vertex split is exhaustive and even.
pub(super) fn run_balanced_vertex_split(vertices: usize, components: usize) -> TestCaseResult {
    let mut rng = SmallRng::seed_from_u64(0);
    let shares =
        component::allocate_vertices(vertices, components, BalancingStrategy::Balanced, &mut rng)
            .map_err(|mismatch| TestCaseError::fail(format!("balanced split rejected: {mismatch}")))?;

    let total: usize = shares.iter().sum();
    let largest = shares.iter().max().copied().unwrap_or(0);
    let smallest = shares.iter().min().copied().unwrap_or(0);
    if shares.len() != components || total != vertices || largest - smallest > 1 {
        return Err(TestCaseError::fail(format!(
            "uneven split of {vertices} over {components}: {shares:?}"
        )));
    }
    Ok(())
}

/// Checks that balancing equalises sums without lowering any degree.
pub(super) fn run_degree_balance(
    mut out_degrees: Vec<usize>,
    mut in_degrees: Vec<usize>,
    seed: u64,
) -> TestCaseResult {
    let out_before = out_degrees.clone();
    let in_before = in_degrees.clone();
    balance(&mut out_degrees, &mut in_degrees, &mut SmallRng::seed_from_u64(seed));

    let out_total: usize = out_degrees.iter().sum();
    let in_total: usize = in_degrees.iter().sum();
    if out_total != in_total {
        return Err(TestCaseError::fail(format!(
            "sums differ after balancing: {out_total} != {in_total}"
        )));
    }
    let grew = |after: &[usize], before: &[usize]| {
        after.iter().zip(before).all(|(now, was)| now >= was)
    };
    if !grew(&out_degrees, &out_before) || !grew(&in_degrees, &in_before) {
        return Err(TestCaseError::fail(
            "balancing lowered a degree".to_owned(),
        ));
    }
    Ok(())
}
