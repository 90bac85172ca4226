//! Component-constrained generation.
//!
//! Vertices and edges are allocated across the requested number of
//! components, each component is built independently over a contiguous
//! vertex range, and the concatenated result is validated by the oracle.
//! Random allocations that cannot be completed reject the attempt and the
//! retry loop starts again from allocation.

mod allocator;
mod builder;

use std::ops::Range;

use rand::Rng;
use tracing::{Span, field, instrument};

pub use self::{
    allocator::{allocate_edges, allocate_vertices},
    builder::build_component,
};
use crate::{
    bounds::EdgeBounds,
    edges::EdgeList,
    error::{AttemptResult, Result},
    request::GenerationRequest,
    retry::{self, Acceptance, Accepted, AttemptStrategy},
};

/// Allocation for one component within an attempt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComponentSpec {
    vertices: Range<usize>,
    edge_budget: usize,
    bounds: EdgeBounds,
}

impl ComponentSpec {
    /// Creates a component over `vertices` holding `edge_budget` edges.
    #[must_use]
    pub const fn new(vertices: Range<usize>, edge_budget: usize, bounds: EdgeBounds) -> Self {
        Self {
            vertices,
            edge_budget,
            bounds,
        }
    }

    /// Returns the half-open vertex range `[start, end)`.
    #[must_use]
    pub fn vertices(&self) -> Range<usize> {
        self.vertices.clone()
    }

    /// Returns the number of edges the component receives.
    #[must_use]
    pub const fn edge_budget(&self) -> usize {
        self.edge_budget
    }

    /// Returns the admissible edge counts for the component.
    #[must_use]
    pub const fn bounds(&self) -> EdgeBounds {
        self.bounds
    }
}

/// Lays out components over consecutive vertex ranges.
///
/// # Errors
/// Propagates the failures of [`allocate_vertices`] and [`allocate_edges`].
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use synthgraph_core::{BalancingStrategy, GenerationRequest, GraphType, component};
///
/// let request = GenerationRequest::builder(GraphType::Simple, 6, 6)
///     .with_component_count(2)
///     .with_balancing(BalancingStrategy::Balanced)
///     .build()?;
/// let mut rng = SmallRng::seed_from_u64(request.seed());
/// let specs = component::plan_components(&request, &mut rng)?.expect("balanced plans succeed");
/// assert_eq!(specs[1].vertices(), 3..6);
/// assert_eq!(specs[1].edge_budget(), 3);
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
pub fn plan_components<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<AttemptResult<Vec<ComponentSpec>>> {
    let graph_type = request.graph_type();
    let shares = match allocate_vertices(
        request.vertex_count(),
        request.component_count(),
        request.balancing(),
        rng,
    ) {
        Ok(shares) => shares,
        Err(mismatch) => return Ok(Err(mismatch)),
    };
    let bounds: Vec<EdgeBounds> = shares
        .iter()
        .map(|share| EdgeBounds::for_component(graph_type, *share))
        .collect();
    let budgets = match allocate_edges(request.edge_count(), &bounds, request.balancing(), rng)? {
        Ok(budgets) => budgets,
        Err(mismatch) => return Ok(Err(mismatch)),
    };

    let mut start = 0;
    let specs = shares
        .into_iter()
        .zip(budgets)
        .zip(bounds)
        .map(|((share, budget), limits)| {
            let range = start..start + share;
            start += share;
            ComponentSpec::new(range, budget, limits)
        })
        .collect();
    Ok(Ok(specs))
}

struct ComponentStrategy<'a> {
    request: &'a GenerationRequest,
}

impl AttemptStrategy for ComponentStrategy<'_> {
    type Plan = Vec<ComponentSpec>;

    fn plan<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<AttemptResult<Self::Plan>> {
        plan_components(self.request, rng)
    }

    fn build<R: Rng + ?Sized>(&mut self, plan: Self::Plan, rng: &mut R) -> EdgeList {
        let graph_type = self.request.graph_type();
        let mut edges = Vec::with_capacity(self.request.edge_count());
        for spec in &plan {
            edges.extend(build_component(spec, graph_type, rng));
        }
        edges
    }
}

/// Generates a graph with exactly `request.component_count()` components.
///
/// Directed requests skip the component-count check: weak connectivity of
/// the result does not pin down the requested count.
#[instrument(
    name = "core.generate_components",
    err,
    skip(request, rng),
    fields(
        graph_type = %request.graph_type(),
        vertices = request.vertex_count(),
        edges = request.edge_count(),
        components = request.component_count(),
        balancing = %request.balancing(),
        attempts = field::Empty,
    ),
)]
pub(crate) fn generate_components<R: Rng + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<Accepted> {
    let graph_type = request.graph_type();
    let acceptance = Acceptance {
        graph_type,
        vertex_count: request.vertex_count(),
        edge_count: request.edge_count(),
        component_count: (!graph_type.is_directed()).then_some(request.component_count()),
    };
    let mut strategy = ComponentStrategy { request };
    let accepted = retry::run(&mut strategy, &acceptance, request.max_attempts(), rng)?;
    Span::current().record("attempts", accepted.attempts);
    Ok(accepted)
}
