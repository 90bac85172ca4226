//! Admissible edge counts for graph types, components and whole requests.
//!
//! [`EdgeBounds::for_component`] gives the combinatorial range for one
//! connected component; [`EdgeBounds::for_request`] lifts it to the whole
//! graph and is what request validation checks before any randomness is
//! drawn. [`edge_range`] and [`density`] support picking edge counts for
//! sparse or dense benchmark instances.

use crate::{
    error::{GenerationError, Result},
    graph_type::GraphType,
};

/// Density above which a graph counts as dense.
pub const DENSE_THRESHOLD: f64 = 0.8;

/// Density below which a graph counts as sparse.
pub const SPARSE_THRESHOLD: f64 = 0.2;

/// Inclusive edge-count range; `max == None` means unbounded.
///
/// # Examples
/// ```
/// use synthgraph_core::{EdgeBounds, GraphType};
///
/// let bounds = EdgeBounds::for_component(GraphType::Simple, 4);
/// assert_eq!((bounds.min(), bounds.max()), (3, Some(6)));
/// assert!(bounds.contains(5));
/// assert!(!bounds.contains(7));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeBounds {
    min: usize,
    max: Option<usize>,
}

impl EdgeBounds {
    /// Creates a range from its endpoints.
    #[must_use]
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Returns the smallest admissible edge count.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Returns the largest admissible edge count, if bounded.
    #[must_use]
    pub const fn max(&self) -> Option<usize> {
        self.max
    }

    /// Returns `true` when `edges` lies in the range.
    #[must_use]
    pub fn contains(&self, edges: usize) -> bool {
        edges >= self.min && self.max.is_none_or(|max| edges <= max)
    }

    /// Returns the range for one connected component of `vertices` vertices.
    ///
    /// Simple and directed components need a spanning chain and stop at the
    /// complete graph. Multigraph components need one edge beyond the chain
    /// for their repeated pair, so a single vertex can only stay empty.
    /// Pseudograph components need one edge per vertex, which for a single
    /// vertex is its self-loop.
    #[must_use]
    pub fn for_component(graph_type: GraphType, vertices: usize) -> Self {
        let chain = vertices.saturating_sub(1);
        let pairs = vertices.saturating_mul(chain);
        match graph_type {
            GraphType::Simple => Self::new(chain, Some(pairs / 2)),
            GraphType::Directed => Self::new(chain, Some(pairs)),
            GraphType::Multigraph | GraphType::MultigraphDirected if vertices <= 1 => {
                Self::new(0, Some(0))
            }
            GraphType::Multigraph | GraphType::MultigraphDirected => Self::new(vertices, None),
            GraphType::Pseudograph | GraphType::PseudographDirected => {
                Self::new(vertices.max(1), None)
            }
        }
    }

    /// Returns the range a whole request must fall in.
    ///
    /// With `component_count == 0` no connectivity is imposed and only the
    /// structural requirement of the type counts (one repeated pair, one
    /// self-loop, one unreciprocated arc). Otherwise the range runs from
    /// every component holding its minimum to one component absorbing all
    /// spare vertices, `V - (C - 1)`, while the rest stay singletons.
    ///
    /// A complete digraph is symmetric and would classify as simple, so
    /// directed ceilings stop one arc short of it.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidParameters`] when `vertex_count` is
    /// zero and [`GenerationError::InsufficientVertices`] when the vertices
    /// cannot seed every component.
    pub fn for_request(
        graph_type: GraphType,
        vertex_count: usize,
        component_count: usize,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GenerationError::invalid("vertex count must be at least 1"));
        }
        if component_count == 0 {
            return Ok(Self::unconstrained(graph_type, vertex_count));
        }

        let insufficient = GenerationError::InsufficientVertices {
            vertex_count,
            component_count,
        };
        let spare = vertex_count
            .checked_sub(component_count - 1)
            .filter(|spare| *spare > 0)
            .ok_or_else(|| insufficient.clone())?;
        let chain = spare - 1;
        let pairs = spare.saturating_mul(chain);

        Ok(match graph_type {
            GraphType::Simple => Self::new(chain, Some(pairs / 2)),
            GraphType::Directed => Self::new(chain.max(1), Some(pairs.saturating_sub(1))),
            GraphType::Multigraph | GraphType::MultigraphDirected => {
                if spare < 2 {
                    return Err(insufficient);
                }
                Self::new(spare, None)
            }
            GraphType::Pseudograph => Self::new(vertex_count, None),
            // Every component forces its own loop; one of them also needs the
            // repeated arc.
            GraphType::PseudographDirected => {
                if spare < 2 {
                    return Err(insufficient);
                }
                Self::new(vertex_count + 1, None)
            }
        })
    }

    fn unconstrained(graph_type: GraphType, vertices: usize) -> Self {
        let pairs = vertices.saturating_mul(vertices.saturating_sub(1));
        let needs_two = |min: usize| {
            if vertices < 2 {
                Self::new(min, Some(0))
            } else {
                Self::new(min, None)
            }
        };
        match graph_type {
            GraphType::Simple => Self::new(0, Some(pairs / 2)),
            GraphType::Directed => Self::new(1, Some(pairs.saturating_sub(1))),
            GraphType::Multigraph | GraphType::MultigraphDirected => needs_two(2),
            GraphType::Pseudograph => Self::new(1, None),
            GraphType::PseudographDirected => needs_two(3),
        }
    }

    /// Returns `Ok(())` when `edge_count` lies in the range, or the matching
    /// [`GenerationError::EdgeCountOutOfRange`].
    ///
    /// # Errors
    /// Returns [`GenerationError::EdgeCountOutOfRange`] when `edge_count`
    /// falls outside the range.
    pub fn check(&self, graph_type: GraphType, edge_count: usize) -> Result<()> {
        if self.contains(edge_count) {
            Ok(())
        } else {
            Err(GenerationError::EdgeCountOutOfRange {
                graph_type,
                edge_count,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Target density band used when choosing an edge count.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DensityPreference {
    /// Any admissible edge count.
    #[default]
    Any,
    /// At most [`SPARSE_THRESHOLD`] of the reference edge count.
    Sparse,
    /// At least [`DENSE_THRESHOLD`] of the reference edge count.
    Dense,
}

/// Returns the inclusive `(low, high)` edge counts a request may use.
///
/// Unbounded types are capped at [`GraphType::max_edges`] so the range
/// stays finite; the density band is then applied on top of that reference.
///
/// # Errors
/// Propagates [`EdgeBounds::for_request`] failures and returns
/// [`GenerationError::InvalidParameters`] when the density band leaves no
/// admissible edge count.
///
/// # Examples
/// ```
/// use synthgraph_core::{DensityPreference, GraphType, edge_range};
///
/// let (low, high) = edge_range(GraphType::Simple, 10, 1, DensityPreference::Dense)?;
/// assert_eq!((low, high), (36, 45));
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
pub fn edge_range(
    graph_type: GraphType,
    vertex_count: usize,
    component_count: usize,
    preference: DensityPreference,
) -> Result<(usize, usize)> {
    let bounds = EdgeBounds::for_request(graph_type, vertex_count, component_count)?;
    let reference = graph_type.max_edges(vertex_count);
    let mut low = bounds.min();
    let mut high = bounds.max().map_or(reference, |max| max.min(reference));

    match preference {
        DensityPreference::Any => {}
        DensityPreference::Sparse => high = high.min(scale(reference, SPARSE_THRESHOLD).0),
        DensityPreference::Dense => low = low.max(scale(reference, DENSE_THRESHOLD).1),
    }

    if low > high {
        return Err(GenerationError::invalid(format!(
            "no {preference:?} edge count exists for a {graph_type} graph with {vertex_count} vertices and {component_count} components"
        )));
    }
    Ok((low, high))
}

/// Returns `(floor, ceil)` of `reference * fraction`.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "density thresholds are fractions of an edge count far below 2^52"
)]
fn scale(reference: usize, fraction: f64) -> (usize, usize) {
    let scaled = reference as f64 * fraction;
    (scaled.floor() as usize, scaled.ceil() as usize)
}

/// Returns `edge_count` relative to the type's reference edge count.
///
/// Returns `0.0` when the reference is zero (a single vertex without loops).
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "density is a ratio of edge counts far below 2^52"
)]
pub fn density(graph_type: GraphType, vertex_count: usize, edge_count: usize) -> f64 {
    let reference = graph_type.max_edges(vertex_count);
    if reference == 0 {
        return 0.0;
    }
    edge_count as f64 / reference as f64
}
