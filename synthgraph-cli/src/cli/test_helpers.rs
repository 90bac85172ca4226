//! Small helpers shared across CLI tests.

use clap::Parser;

use super::{Cli, CliError, ExecutionSummary, run_cli};

/// Parses `args` as if typed after the binary name.
pub(super) fn parse(args: &[&str]) -> Cli {
    let argv = std::iter::once("synthgraph").chain(args.iter().copied());
    match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(err) => panic!("arguments {args:?} must parse: {err}"),
    }
}

/// Parses and runs `args`, panicking on failure.
pub(super) fn run(args: &[&str]) -> ExecutionSummary {
    match run_cli(parse(args)) {
        Ok(summary) => summary,
        Err(err) => panic!("arguments {args:?} must succeed: {err}"),
    }
}

/// Parses and runs `args`, panicking on success.
pub(super) fn run_expecting_error(args: &[&str]) -> CliError {
    match run_cli(parse(args)) {
        Ok(_) => panic!("arguments {args:?} must fail"),
        Err(err) => err,
    }
}
