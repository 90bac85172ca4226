//! Command-line interface for the graph generators.
//!
//! `generate` draws graphs with a fixed vertex, edge and component count;
//! `power-law` draws a graph whose degrees follow a power law. Edge lists
//! are rendered to stdout as tab-separated vertex pairs.

mod commands;

pub use commands::{
    BalancingArg, Cli, CliError, Command, DensityArg, ExecutionSummary, GenerateCommand,
    GraphTypeArg, PowerLawCommand, RenderedGraph, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
