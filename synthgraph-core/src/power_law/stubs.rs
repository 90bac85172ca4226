//! Stub matching of a degree sequence into an edge list.

use rand::{Rng, seq::SliceRandom};

use super::DegreeSequence;
use crate::{edges::EdgeList, graph_type::GraphType, sampler::EdgeSampler};

fn expand(degrees: &[usize]) -> Vec<usize> {
    degrees
        .iter()
        .enumerate()
        .flat_map(|(vertex, degree)| std::iter::repeat_n(vertex, *degree))
        .collect()
}

/// Draws two different vertices out of `vertices`.
fn distinct_pair<R: Rng + ?Sized>(vertices: usize, rng: &mut R) -> Option<(usize, usize)> {
    if vertices < 2 {
        return None;
    }
    let source = rng.gen_range(0..vertices);
    let target = rng.gen_range(0..vertices - 1);
    Some((source, if target >= source { target + 1 } else { target }))
}

/// Pairs the stubs of `degrees` into edges permitted by `graph_type`.
///
/// Undirected sequences pair two stubs from one shuffled list; directed
/// sequences pair an out-stub with an in-stub. A pair the type forbids is
/// dropped along with both stubs. Afterwards the first edge is repeated if
/// the type allows repeats but none occurred; when no edge survived, a pair
/// of distinct random vertices is added twice instead. A self-loop is added
/// on a random vertex if the type needs one and none occurred.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use synthgraph_core::{GraphType, power_law::{DegreeSequence, match_stubs}};
///
/// let degrees = DegreeSequence::Undirected(vec![2, 2, 2, 2]);
/// let edges = match_stubs(&degrees, GraphType::Pseudograph, &mut SmallRng::seed_from_u64(1));
/// assert!(edges.iter().any(|edge| edge.is_loop()));
/// ```
pub fn match_stubs<R: Rng + ?Sized>(
    degrees: &DegreeSequence,
    graph_type: GraphType,
    rng: &mut R,
) -> EdgeList {
    let mut sampler = EdgeSampler::new(graph_type, degrees.edge_capacity() + 2);
    match degrees {
        DegreeSequence::Undirected(degrees) => {
            let mut stubs = expand(degrees);
            stubs.shuffle(rng);
            while let (Some(source), Some(target)) = (stubs.pop(), stubs.pop()) {
                sampler.try_push(source, target);
            }
        }
        DegreeSequence::Directed {
            out_degrees,
            in_degrees,
        } => {
            let mut out_stubs = expand(out_degrees);
            let mut in_stubs = expand(in_degrees);
            out_stubs.shuffle(rng);
            in_stubs.shuffle(rng);
            while let (Some(source), Some(target)) = (out_stubs.pop(), in_stubs.pop()) {
                sampler.try_push(source, target);
            }
        }
    }

    if graph_type.allows_multi_edges() && !sampler.has_repeat() {
        if let Some(edge) = sampler.first() {
            sampler.push(edge.source(), edge.target());
        } else if let Some((source, target)) = distinct_pair(degrees.len(), rng) {
            sampler.push(source, target);
            sampler.push(source, target);
        }
    }
    if graph_type.requires_self_loops() && !sampler.has_loop() && !degrees.is_empty() {
        let vertex = rng.gen_range(0..degrees.len());
        sampler.push(vertex, vertex);
    }
    sampler.into_edges()
}
