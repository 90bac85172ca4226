//! Benchmark support crate for synthgraph.
//!
//! Provides parameter types and request builders used by the Criterion
//! benchmarks for the component, direct and power-law generation paths.

pub mod error;
pub mod params;
