//! Benchmark parameter types.
//!
//! Each parameter set names one benchmark input and knows how to turn itself
//! into a validated request, so benchmark bodies only time generation.

use std::fmt;

use synthgraph_core::{
    BalancingStrategy, DensityPreference, GenerationRequest, GraphType, edge_range,
    power_law::PowerLawRequest,
};

use crate::error::BenchSetupError;

/// Seed shared by every benchmark request.
pub const SEED: u64 = 42;

/// Parameters for a component-constrained generation run.
#[derive(Clone, Copy, Debug)]
pub struct ComponentBenchParams {
    /// Graph type to generate.
    pub graph_type: GraphType,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of connected components.
    pub component_count: usize,
    /// Split strategy across components.
    pub balancing: BalancingStrategy,
}

impl ComponentBenchParams {
    /// Builds a request at the midpoint of the sparse edge band.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Generation`] if no sparse edge count
    /// exists or the request is rejected.
    pub fn request(&self) -> Result<GenerationRequest, BenchSetupError> {
        let edges = midpoint_edges(
            self.graph_type,
            self.vertex_count,
            self.component_count,
            DensityPreference::Sparse,
        )?;
        Ok(GenerationRequest::builder(self.graph_type, self.vertex_count, edges)
            .with_component_count(self.component_count)
            .with_balancing(self.balancing)
            .with_seed(SEED)
            .build()?)
    }
}

impl fmt::Display for ComponentBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},n={},c={},{}",
            self.graph_type, self.vertex_count, self.component_count, self.balancing,
        )
    }
}

/// Parameters for a run without a component count.
#[derive(Clone, Copy, Debug)]
pub struct DirectBenchParams {
    /// Graph type to generate.
    pub graph_type: GraphType,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Density band the edge count is taken from.
    pub density: DensityPreference,
}

impl DirectBenchParams {
    /// Builds a request at the midpoint of the density band.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Generation`] if the band is empty or the
    /// request is rejected.
    pub fn request(&self) -> Result<GenerationRequest, BenchSetupError> {
        let edges = midpoint_edges(self.graph_type, self.vertex_count, 0, self.density)?;
        Ok(GenerationRequest::builder(self.graph_type, self.vertex_count, edges)
            .with_seed(SEED)
            .build()?)
    }
}

impl fmt::Display for DirectBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={},{:?}", self.graph_type, self.vertex_count, self.density)
    }
}

/// Parameters for a power-law run.
#[derive(Clone, Copy, Debug)]
pub struct PowerLawBenchParams {
    /// Graph type to generate.
    pub graph_type: GraphType,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Degree exponent.
    pub gamma: f64,
}

impl PowerLawBenchParams {
    /// Builds the power-law request.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Generation`] if the parameters are
    /// rejected.
    pub fn request(&self) -> Result<PowerLawRequest, BenchSetupError> {
        Ok(PowerLawRequest::builder(self.vertex_count, self.graph_type)
            .with_gamma(self.gamma)
            .with_seed(SEED)
            .build()?)
    }
}

impl fmt::Display for PowerLawBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},n={},gamma={}", self.graph_type, self.vertex_count, self.gamma)
    }
}

fn midpoint_edges(
    graph_type: GraphType,
    vertex_count: usize,
    component_count: usize,
    density: DensityPreference,
) -> Result<usize, BenchSetupError> {
    let (low, high) = edge_range(graph_type, vertex_count, component_count, density)?;
    Ok(low.midpoint(high))
}
