//! Synthgraph core library.
//!
//! Generates synthetic graphs with an exact vertex count, edge count and
//! graph type, optionally split into a fixed number of connected components
//! or shaped by a power-law degree sequence.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bounds;
pub mod component;
mod direct;
mod edges;
mod error;
mod generator;
mod graph_type;
pub mod oracle;
pub mod power_law;
#[cfg(test)]
mod property;
mod request;
mod retry;
mod sampler;
#[cfg(test)]
mod test_utils;

pub use crate::{
    bounds::{DENSE_THRESHOLD, DensityPreference, EdgeBounds, SPARSE_THRESHOLD, density, edge_range},
    edges::{AdjacencyMatrix, Edge, EdgeList},
    error::{AttemptResult, GenerationError, GenerationErrorCode, Mismatch, Result},
    generator::{DatasetEntry, GeneratedGraph, generate, generate_dataset, generate_with_rng},
    graph_type::GraphType,
    request::{
        BalancingStrategy, DEFAULT_SEED, GenerationRequest, GenerationRequestBuilder, MAX_ATTEMPTS,
    },
};
