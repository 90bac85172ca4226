//! Support library for the synthgraph CLI binary.
//!
//! Exposes argument parsing, command execution and logging setup so tests
//! can drive the command pipeline without spawning a subprocess.

pub mod cli;
pub mod logging;
