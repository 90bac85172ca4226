//! Generation requests and their builder.
//!
//! A [`GenerationRequest`] can only be obtained from
//! [`GenerationRequestBuilder::build`], which rejects structurally impossible
//! parameters before any random number is drawn.

use std::{fmt, num::NonZeroUsize};

use crate::{
    bounds::EdgeBounds,
    error::{GenerationError, Result},
    graph_type::GraphType,
};

/// Default retry budget for the randomised generators.
pub const MAX_ATTEMPTS: usize = 100;

/// Seed used when a request does not override it.
pub const DEFAULT_SEED: u64 = 0x5EED_6A4F;

/// Policy for splitting vertices and edges across components.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum BalancingStrategy {
    /// Every vertex and every edge share is drawn at random.
    #[default]
    Random,
    /// Drawn at random, then sorted ascending.
    PartiallyBalanced,
    /// Even split with the remainder given to the first component.
    Balanced,
}

impl BalancingStrategy {
    /// Resolves the numeric strategy code used by batch tooling.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidParameters`] for codes other than
    /// 0 (random), 1 (partially balanced) and 2 (balanced).
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Random),
            1 => Ok(Self::PartiallyBalanced),
            2 => Ok(Self::Balanced),
            _ => Err(GenerationError::invalid(format!(
                "unknown balancing strategy code {code}; expected 0, 1 or 2"
            ))),
        }
    }

    /// Returns the numeric strategy code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Random => 0,
            Self::PartiallyBalanced => 1,
            Self::Balanced => 2,
        }
    }
}

impl fmt::Display for BalancingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Random => "random",
            Self::PartiallyBalanced => "partially-balanced",
            Self::Balanced => "balanced",
        })
    }
}

/// Validated parameters for one component-constrained or direct generation.
///
/// # Examples
/// ```
/// use synthgraph_core::{BalancingStrategy, GenerationRequest, GraphType};
///
/// let request = GenerationRequest::builder(GraphType::Simple, 6, 6)
///     .with_component_count(2)
///     .with_balancing(BalancingStrategy::Balanced)
///     .with_seed(7)
///     .build()?;
/// assert_eq!(request.component_count(), 2);
/// assert_eq!(request.max_attempts().get(), 100);
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerationRequest {
    graph_type: GraphType,
    vertex_count: usize,
    edge_count: usize,
    component_count: usize,
    balancing: BalancingStrategy,
    seed: u64,
    max_attempts: NonZeroUsize,
}

impl GenerationRequest {
    /// Starts a builder for `edge_count` edges over `vertex_count` vertices.
    #[must_use]
    pub fn builder(
        graph_type: GraphType,
        vertex_count: usize,
        edge_count: usize,
    ) -> GenerationRequestBuilder {
        GenerationRequestBuilder::new(graph_type, vertex_count, edge_count)
    }

    /// Returns the requested graph type.
    #[must_use]
    pub const fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the exact number of edges to produce.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the requested component count; zero leaves connectivity free.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.component_count
    }

    /// Returns the balancing strategy for component allocation.
    #[must_use]
    pub const fn balancing(&self) -> BalancingStrategy {
        self.balancing
    }

    /// Returns the seed for the request's random stream.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the retry budget.
    #[must_use]
    pub const fn max_attempts(&self) -> NonZeroUsize {
        self.max_attempts
    }
}

/// Builder for [`GenerationRequest`].
#[derive(Clone, Debug)]
pub struct GenerationRequestBuilder {
    graph_type: GraphType,
    vertex_count: usize,
    edge_count: usize,
    component_count: usize,
    balancing: BalancingStrategy,
    seed: u64,
    max_attempts: usize,
}

impl GenerationRequestBuilder {
    /// Creates a builder with no component constraint, random balancing,
    /// [`DEFAULT_SEED`] and [`MAX_ATTEMPTS`].
    #[must_use]
    pub const fn new(graph_type: GraphType, vertex_count: usize, edge_count: usize) -> Self {
        Self {
            graph_type,
            vertex_count,
            edge_count,
            component_count: 0,
            balancing: BalancingStrategy::Random,
            seed: DEFAULT_SEED,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Requests exactly `count` connected components; zero disables the
    /// constraint.
    #[must_use]
    pub const fn with_component_count(mut self, count: usize) -> Self {
        self.component_count = count;
        self
    }

    /// Overrides the balancing strategy.
    #[must_use]
    pub const fn with_balancing(mut self, balancing: BalancingStrategy) -> Self {
        self.balancing = balancing;
        self
    }

    /// Overrides the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides the retry budget.
    #[must_use]
    pub const fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Validates the parameters and produces the request.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidParameters`] for a zero vertex count
    /// or retry budget, [`GenerationError::InsufficientVertices`] when the
    /// components cannot all be seeded, and
    /// [`GenerationError::EdgeCountOutOfRange`] when the edge count does not
    /// fit the type.
    ///
    /// # Examples
    /// ```
    /// use synthgraph_core::{GenerationErrorCode, GenerationRequest, GraphType};
    ///
    /// let err = GenerationRequest::builder(GraphType::Simple, 4, 7)
    ///     .build()
    ///     .expect_err("K4 only has six edges");
    /// assert_eq!(err.code(), GenerationErrorCode::EdgeCountOutOfRange);
    /// ```
    pub fn build(self) -> Result<GenerationRequest> {
        let max_attempts = NonZeroUsize::new(self.max_attempts)
            .ok_or_else(|| GenerationError::invalid("max attempts must be at least 1"))?;
        EdgeBounds::for_request(self.graph_type, self.vertex_count, self.component_count)?
            .check(self.graph_type, self.edge_count)?;

        Ok(GenerationRequest {
            graph_type: self.graph_type,
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
            component_count: self.component_count,
            balancing: self.balancing,
            seed: self.seed,
            max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::error::GenerationErrorCode;

    #[rstest]
    #[case::zero_vertices(GraphType::Simple, 0, 0, 0, 100, GenerationErrorCode::InvalidParameters)]
    #[case::zero_attempts(GraphType::Simple, 4, 3, 0, 0, GenerationErrorCode::InvalidParameters)]
    #[case::too_many_components(GraphType::Simple, 3, 0, 4, 100, GenerationErrorCode::InsufficientVertices)]
    #[case::above_ceiling(GraphType::Simple, 4, 7, 0, 100, GenerationErrorCode::EdgeCountOutOfRange)]
    #[case::below_chain(GraphType::Simple, 6, 3, 2, 100, GenerationErrorCode::EdgeCountOutOfRange)]
    #[case::multigraph_without_repeat(GraphType::Multigraph, 4, 1, 0, 100, GenerationErrorCode::EdgeCountOutOfRange)]
    #[case::directed_without_arcs(GraphType::Directed, 4, 0, 0, 100, GenerationErrorCode::EdgeCountOutOfRange)]
    fn build_rejects_impossible_requests(
        #[case] kind: GraphType,
        #[case] vertices: usize,
        #[case] edges: usize,
        #[case] components: usize,
        #[case] attempts: usize,
        #[case] expected: GenerationErrorCode,
    ) {
        let err = GenerationRequest::builder(kind, vertices, edges)
            .with_component_count(components)
            .with_max_attempts(attempts)
            .build()
            .expect_err("request must be rejected");
        assert_eq!(err.code(), expected);
    }

    #[test]
    fn builder_defaults_are_reproducible() {
        let request = GenerationRequest::builder(GraphType::Pseudograph, 5, 5)
            .build()
            .expect("request is valid");
        assert_eq!(request.seed(), DEFAULT_SEED);
        assert_eq!(request.component_count(), 0);
        assert_eq!(request.balancing(), BalancingStrategy::Random);
        assert_eq!(request.max_attempts().get(), MAX_ATTEMPTS);
    }

    #[rstest]
    #[case(0, BalancingStrategy::Random)]
    #[case(1, BalancingStrategy::PartiallyBalanced)]
    #[case(2, BalancingStrategy::Balanced)]
    fn balancing_codes_resolve(#[case] code: u8, #[case] expected: BalancingStrategy) {
        let strategy = BalancingStrategy::from_code(code).expect("code is known");
        assert_eq!(strategy, expected);
        assert_eq!(strategy.code(), code);
    }

    #[test]
    fn unknown_balancing_code_is_invalid() {
        let err = BalancingStrategy::from_code(3).expect_err("code 3 is unknown");
        assert_eq!(err.code(), GenerationErrorCode::InvalidParameters);
    }
}
