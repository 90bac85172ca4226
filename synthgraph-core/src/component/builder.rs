//! Construction of a single connected component.

use rand::{Rng, seq::SliceRandom};

use super::ComponentSpec;
use crate::{edges::EdgeList, graph_type::GraphType, sampler::EdgeSampler};

/// Builds the edges of one component.
///
/// The component's vertices are shuffled and joined into a chain, which
/// connects them with `n - 1` edges. The rest of the budget is filled by
/// rejection sampling within the component; types that need a self-loop or
/// a repeated pair have it forced into the final slots when the draws did
/// not produce one.
///
/// The budget must lie within the component's bounds; an admissible draw
/// always exists then, so sampling is not capped.
#[must_use]
pub fn build_component<R: Rng + ?Sized>(
    spec: &ComponentSpec,
    graph_type: GraphType,
    rng: &mut R,
) -> EdgeList {
    let mut vertices: Vec<usize> = spec.vertices().collect();
    vertices.shuffle(rng);

    let budget = spec.edge_budget();
    let mut sampler = EdgeSampler::new(graph_type, budget);
    for pair in vertices.windows(2) {
        if let [source, target] = *pair {
            sampler.push(source, target);
        }
    }
    sampler.fill(rng, &vertices, budget);
    sampler.into_edges()
}
