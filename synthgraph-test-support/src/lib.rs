//! Shared test utilities used across synthgraph crates.
//!
//! Provides a tracing layer that records spans and events for assertions and
//! the environment-driven profile that sizes property-test runs.

pub mod ci;
pub mod tracing;
