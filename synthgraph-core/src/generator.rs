//! Entry points for component-constrained and direct generation.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    component::generate_components,
    direct::generate_direct,
    edges::{AdjacencyMatrix, Edge, EdgeList},
    error::Result,
    graph_type::GraphType,
    request::GenerationRequest,
};

/// Graph accepted by the oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedGraph {
    graph_type: GraphType,
    vertex_count: usize,
    edges: EdgeList,
    attempts: usize,
}

impl GeneratedGraph {
    /// Returns the graph type, as requested and as classified.
    #[must_use]
    pub const fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the edges in generation order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns how many attempts the retry loop needed.
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Consumes the graph, returning its edge list.
    #[must_use]
    pub fn into_edges(self) -> EdgeList {
        self.edges
    }

    /// Builds the multiplicity matrix of the graph.
    ///
    /// # Errors
    /// Never fails for graphs produced by this crate; propagates
    /// [`AdjacencyMatrix::from_edges`] errors otherwise.
    pub fn adjacency(&self) -> Result<AdjacencyMatrix> {
        AdjacencyMatrix::from_edges(self.vertex_count, &self.edges, self.graph_type.is_directed())
    }
}

/// Generates the graph described by `request` from its own seed.
///
/// Two calls with equal requests return equal graphs.
///
/// # Errors
/// Returns [`crate::GenerationError::InfeasibleAllocation`] when a balanced
/// split cannot be built and [`crate::GenerationError::AttemptsExhausted`]
/// when every attempt was rejected.
///
/// # Examples
/// ```
/// use synthgraph_core::{GenerationRequest, GraphType, generate};
///
/// let request = GenerationRequest::builder(GraphType::Pseudograph, 5, 5).build()?;
/// let graph = generate(&request)?;
/// assert_eq!(graph.edges().len(), 5);
/// assert!(graph.edges().iter().any(|edge| edge.is_loop()));
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
pub fn generate(request: &GenerationRequest) -> Result<GeneratedGraph> {
    let mut rng = SmallRng::seed_from_u64(request.seed());
    generate_with_rng(request, &mut rng)
}

/// Generates the graph described by `request` from the caller's stream.
///
/// Requests with a component count take the component-constrained path;
/// the rest are drawn directly over the whole vertex set. The request's
/// seed is ignored.
///
/// # Errors
/// See [`generate`].
#[instrument(
    name = "core.generate",
    err,
    skip(request, rng),
    fields(
        graph_type = %request.graph_type(),
        vertices = request.vertex_count(),
        edges = request.edge_count(),
        components = request.component_count(),
    ),
)]
pub fn generate_with_rng<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<GeneratedGraph> {
    let accepted = if request.component_count() > 0 {
        generate_components(request, rng)?
    } else {
        generate_direct(request, rng)?
    };
    Ok(GeneratedGraph {
        graph_type: request.graph_type(),
        vertex_count: request.vertex_count(),
        edges: accepted.edges,
        attempts: accepted.attempts,
    })
}

/// One graph of a dataset with its generation time.
#[derive(Clone, Debug)]
pub struct DatasetEntry {
    graph: GeneratedGraph,
    elapsed: Duration,
}

impl DatasetEntry {
    /// Returns the generated graph; its edges are sorted ascending.
    #[must_use]
    pub const fn graph(&self) -> &GeneratedGraph {
        &self.graph
    }

    /// Returns the wall-clock time spent generating the graph.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Generates `count` graphs for `request` from one stream seeded with the
/// request's seed.
///
/// # Errors
/// Stops at the first graph that fails; see [`generate`].
///
/// # Examples
/// ```
/// use synthgraph_core::{GenerationRequest, GraphType, generate_dataset};
///
/// let request = GenerationRequest::builder(GraphType::Simple, 8, 10).build()?;
/// let dataset = generate_dataset(&request, 3)?;
/// assert_eq!(dataset.len(), 3);
/// assert!(dataset[0].graph().edges().is_sorted());
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
#[instrument(
    name = "core.dataset",
    err,
    skip(request),
    fields(graph_type = %request.graph_type(), vertices = request.vertex_count()),
)]
pub fn generate_dataset(request: &GenerationRequest, count: usize) -> Result<Vec<DatasetEntry>> {
    let mut rng = SmallRng::seed_from_u64(request.seed());
    let mut entries = Vec::with_capacity(count);
    for index in 0..count {
        let started = Instant::now();
        let mut graph = generate_with_rng(request, &mut rng)?;
        graph.edges.sort_unstable();
        let elapsed = started.elapsed();
        info!(index, elapsed = ?elapsed, "dataset graph generated");
        entries.push(DatasetEntry { graph, elapsed });
    }
    Ok(entries)
}
