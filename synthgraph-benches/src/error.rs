//! Benchmark setup error type.

use synthgraph_core::GenerationError;

/// Errors that may occur while preparing a benchmark request.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The request was rejected or generation failed.
    #[error("graph generation failed: {0}")]
    Generation(#[from] GenerationError),
}
