//! Property-based tests for the generation engine.
//!
//! Checks that every accepted graph has the requested edge count, type and
//! (for undirected requests) component count, that generation is a pure
//! function of the request, and that the allocation and balancing helpers
//! keep their arithmetic invariants.

mod invariants;
mod strategies;
mod tests;
