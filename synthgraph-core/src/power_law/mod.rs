//! Power-law graphs built by stub matching.
//!
//! A degree sequence is drawn from a Zipf distribution, directed sequences
//! are balanced, and the stubs are paired into edges under the rules of the
//! graph type. The sampled degrees are returned alongside the edges because
//! stub matching drops forbidden pairs, so realised degrees can fall short.

mod degrees;
mod stubs;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{Span, field, info, instrument};

pub use self::{
    degrees::{DegreeSampler, DegreeSequence, MAX_REDRAWS, balance},
    stubs::match_stubs,
};
use crate::{
    edges::{Edge, EdgeList},
    error::{GenerationError, Result},
    graph_type::GraphType,
    request::DEFAULT_SEED,
};

/// Lower end of the default exponent range.
pub const GAMMA_MIN: f64 = 2.0;

/// Upper end of the default exponent range.
pub const GAMMA_MAX: f64 = 3.0;

/// Validated parameters for a power-law graph.
///
/// # Examples
/// ```
/// use synthgraph_core::{GraphType, power_law::PowerLawRequest};
///
/// let request = PowerLawRequest::builder(100, GraphType::Multigraph)
///     .with_gamma(2.5)
///     .with_seed(3)
///     .build()?;
/// assert_eq!(request.degree_bounds(), (1, 99));
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PowerLawRequest {
    vertex_count: usize,
    graph_type: GraphType,
    gamma: Option<f64>,
    k_min: usize,
    k_max: usize,
    seed: u64,
}

impl PowerLawRequest {
    /// Starts a builder for `vertex_count` vertices.
    #[must_use]
    pub const fn builder(vertex_count: usize, graph_type: GraphType) -> PowerLawRequestBuilder {
        PowerLawRequestBuilder {
            vertex_count,
            graph_type,
            gamma: None,
            degree_bounds: None,
            seed: DEFAULT_SEED,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the graph type.
    #[must_use]
    pub const fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// Returns the fixed exponent, or `None` when it is drawn per graph.
    #[must_use]
    pub const fn gamma(&self) -> Option<f64> {
        self.gamma
    }

    /// Returns the inclusive degree bounds `(k_min, k_max)`.
    #[must_use]
    pub const fn degree_bounds(&self) -> (usize, usize) {
        (self.k_min, self.k_max)
    }

    /// Returns the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// Builder for [`PowerLawRequest`].
#[derive(Clone, Debug)]
pub struct PowerLawRequestBuilder {
    vertex_count: usize,
    graph_type: GraphType,
    gamma: Option<f64>,
    degree_bounds: Option<(usize, usize)>,
    seed: u64,
}

impl PowerLawRequestBuilder {
    /// Fixes the exponent instead of drawing it from
    /// `[GAMMA_MIN, GAMMA_MAX]`.
    #[must_use]
    pub const fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = Some(gamma);
        self
    }

    /// Overrides the default degree bounds `[1, n - 1]`.
    #[must_use]
    pub const fn with_degree_bounds(mut self, k_min: usize, k_max: usize) -> Self {
        self.degree_bounds = Some((k_min, k_max));
        self
    }

    /// Overrides the seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the parameters and produces the request.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidParameters`] for fewer than two
    /// vertices, an exponent that is not finite and above one, or degree
    /// bounds outside `1 <= k_min <= k_max`.
    pub fn build(self) -> Result<PowerLawRequest> {
        if self.vertex_count < 2 {
            return Err(GenerationError::invalid(format!(
                "power-law graphs need at least 2 vertices, got {}",
                self.vertex_count
            )));
        }
        let (k_min, k_max) = self.degree_bounds.unwrap_or((1, self.vertex_count - 1));
        // Validates the exponent and bounds with the same rules sampling uses.
        DegreeSampler::new(self.gamma.unwrap_or(GAMMA_MIN), k_min, k_max)?;

        Ok(PowerLawRequest {
            vertex_count: self.vertex_count,
            graph_type: self.graph_type,
            gamma: self.gamma,
            k_min,
            k_max,
            seed: self.seed,
        })
    }
}

/// Power-law graph with the degree sequence it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct PowerLawGraph {
    graph_type: GraphType,
    gamma: f64,
    degrees: DegreeSequence,
    edges: EdgeList,
}

impl PowerLawGraph {
    /// Returns the requested graph type.
    #[must_use]
    pub const fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    /// Returns the exponent the degrees were drawn with.
    #[must_use]
    pub const fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the sampled degrees, before stub matching dropped any pair.
    #[must_use]
    pub const fn degrees(&self) -> &DegreeSequence {
        &self.degrees
    }

    /// Returns the realised edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Consumes the graph, returning its edge list.
    #[must_use]
    pub fn into_edges(self) -> EdgeList {
        self.edges
    }
}

/// Generates a power-law graph from the request's seed.
///
/// # Errors
/// Returns [`GenerationError::InvalidParameters`] if the exponent or degree
/// bounds are rejected by [`DegreeSampler::new`].
///
/// # Examples
/// ```
/// use synthgraph_core::{GraphType, power_law::{PowerLawRequest, generate_power_law}};
///
/// let request = PowerLawRequest::builder(50, GraphType::Pseudograph).build()?;
/// let graph = generate_power_law(&request)?;
/// assert_eq!(graph.degrees().len(), 50);
/// assert!(graph.edges().iter().any(|edge| edge.is_loop()));
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
pub fn generate_power_law(request: &PowerLawRequest) -> Result<PowerLawGraph> {
    let mut rng = SmallRng::seed_from_u64(request.seed());
    generate_power_law_with_rng(request, &mut rng)
}

/// Generates a power-law graph from the caller's stream.
///
/// # Errors
/// See [`generate_power_law`].
#[instrument(
    name = "core.generate_power_law",
    err,
    skip(request, rng),
    fields(
        graph_type = %request.graph_type(),
        vertices = request.vertex_count(),
        gamma = field::Empty,
    ),
)]
pub fn generate_power_law_with_rng<R: Rng + ?Sized>(
    request: &PowerLawRequest,
    rng: &mut R,
) -> Result<PowerLawGraph> {
    let gamma = request
        .gamma()
        .unwrap_or_else(|| rng.gen_range(GAMMA_MIN..=GAMMA_MAX));
    Span::current().record("gamma", gamma);

    let (k_min, k_max) = request.degree_bounds();
    let sampler = DegreeSampler::new(gamma, k_min, k_max)?;
    let graph_type = request.graph_type();
    let degrees = sampler.sample(request.vertex_count(), graph_type.is_directed(), rng);
    let edges = match_stubs(&degrees, graph_type, rng);
    info!(
        capacity = degrees.edge_capacity(),
        edges = edges.len(),
        "stubs matched"
    );

    Ok(PowerLawGraph {
        graph_type,
        gamma,
        degrees,
        edges,
    })
}

#[cfg(test)]
mod tests;
