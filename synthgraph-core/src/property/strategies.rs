//! Strategy builders for generation property tests.
//!
//! Requests are drawn inside the admissible edge range of their type so
//! that only parameters accepted by the builder reach the generators.

use proptest::prelude::*;

use crate::{BalancingStrategy, DensityPreference, GenerationRequest, GraphType, edge_range};

/// Largest vertex count drawn; keeps dense requests cheap.
const MAX_VERTICES: usize = 24;
/// Largest component count drawn.
const MAX_COMPONENTS: usize = 4;

/// Generates valid requests across every type, path and balancing strategy.
pub(super) fn request_strategy() -> impl Strategy<Value = GenerationRequest> {
    (
        prop::sample::select(GraphType::ALL.to_vec()),
        2..=MAX_VERTICES,
        0..=MAX_COMPONENTS,
        prop::sample::select(vec![
            BalancingStrategy::Random,
            BalancingStrategy::PartiallyBalanced,
            BalancingStrategy::Balanced,
        ]),
        0.0..=1.0_f64,
        any::<u64>(),
    )
        .prop_filter_map(
            "request must be admissible",
            |(graph_type, vertices, components, balancing, position, seed)| {
                build_request(graph_type, vertices, components, balancing, position, seed)
            },
        )
}

/// Picks the edge count at `position` within the admissible range.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "interpolating within a small edge range"
)]
fn build_request(
    graph_type: GraphType,
    vertices: usize,
    components: usize,
    balancing: BalancingStrategy,
    position: f64,
    seed: u64,
) -> Option<GenerationRequest> {
    let components = components.min(vertices);
    let (low, high) =
        edge_range(graph_type, vertices, components, DensityPreference::Any).ok()?;
    let edges = low + ((high - low) as f64 * position).round() as usize;
    GenerationRequest::builder(graph_type, vertices, edges)
        .with_component_count(components)
        .with_balancing(balancing)
        .with_seed(seed)
        .build()
        .ok()
}
