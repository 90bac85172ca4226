//! Command implementations and argument parsing for the synthgraph CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand, ValueEnum};
use synthgraph_core::{
    BalancingStrategy, DEFAULT_SEED, DensityPreference, Edge, GenerationError, GenerationRequest,
    GraphType, MAX_ATTEMPTS, edge_range, generate_dataset,
    power_law::{PowerLawRequest, generate_power_law},
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "synthgraph", about = "Generate synthetic graphs with exact shapes.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate graphs with exact vertex, edge and component counts.
    Generate(GenerateCommand),
    /// Generate a graph whose degrees follow a power law.
    PowerLaw(PowerLawCommand),
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Graph type to generate.
    #[arg(long = "type", value_enum)]
    pub graph_type: GraphTypeArg,

    /// Number of vertices.
    #[arg(long, short = 'n')]
    pub vertices: usize,

    /// Number of edges; derived from `--density` when omitted.
    #[arg(long, short = 'e', conflicts_with = "density")]
    pub edges: Option<usize>,

    /// Density band used to derive the edge count.
    #[arg(long, value_enum, default_value_t = DensityArg::Any)]
    pub density: DensityArg,

    /// Number of connected components; zero leaves connectivity free.
    #[arg(long, short = 'c', default_value_t = 0)]
    pub components: usize,

    /// How vertices and edges are spread across components.
    #[arg(long, value_enum, default_value_t = BalancingArg::Random)]
    pub balancing: BalancingArg,

    /// Seed for the random stream.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Attempts allowed before giving up.
    #[arg(long = "max-attempts", default_value_t = MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Number of graphs drawn from the same stream.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

/// Options accepted by the `power-law` command.
#[derive(Debug, Args, Clone)]
pub struct PowerLawCommand {
    /// Graph type to generate.
    #[arg(long = "type", value_enum)]
    pub graph_type: GraphTypeArg,

    /// Number of vertices.
    #[arg(long, short = 'n')]
    pub vertices: usize,

    /// Power-law exponent; drawn from [2, 3] when omitted.
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Smallest degree drawn.
    #[arg(long = "min-degree", default_value_t = 1)]
    pub min_degree: usize,

    /// Largest degree drawn; defaults to one less than the vertex count.
    #[arg(long = "max-degree")]
    pub max_degree: Option<usize>,

    /// Seed for the random stream.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

/// Graph types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphTypeArg {
    /// Undirected, no parallel edges, no loops.
    Simple,
    /// Directed, no parallel arcs, no loops.
    Directed,
    /// Undirected with at least one parallel edge.
    Multigraph,
    /// Directed with at least one parallel arc.
    MultigraphDirected,
    /// Undirected with at least one loop.
    Pseudograph,
    /// Directed with at least one loop and one parallel arc.
    PseudographDirected,
}

impl From<GraphTypeArg> for GraphType {
    fn from(value: GraphTypeArg) -> Self {
        match value {
            GraphTypeArg::Simple => Self::Simple,
            GraphTypeArg::Directed => Self::Directed,
            GraphTypeArg::Multigraph => Self::Multigraph,
            GraphTypeArg::MultigraphDirected => Self::MultigraphDirected,
            GraphTypeArg::Pseudograph => Self::Pseudograph,
            GraphTypeArg::PseudographDirected => Self::PseudographDirected,
        }
    }
}

/// Balancing strategies accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BalancingArg {
    /// Fully random split.
    Random,
    /// Random split, sorted ascending.
    PartiallyBalanced,
    /// Even split.
    Balanced,
}

impl From<BalancingArg> for BalancingStrategy {
    fn from(value: BalancingArg) -> Self {
        match value {
            BalancingArg::Random => Self::Random,
            BalancingArg::PartiallyBalanced => Self::PartiallyBalanced,
            BalancingArg::Balanced => Self::Balanced,
        }
    }
}

/// Density bands accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DensityArg {
    /// Anywhere in the admissible range.
    Any,
    /// At most a fifth of the maximum edge count.
    Sparse,
    /// At least four fifths of the maximum edge count.
    Dense,
}

impl From<DensityArg> for DensityPreference {
    fn from(value: DensityArg) -> Self {
        match value {
            DensityArg::Any => Self::Any,
            DensityArg::Sparse => Self::Sparse,
            DensityArg::Dense => Self::Dense,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation failed or its parameters were rejected.
    #[error(transparent)]
    Core(#[from] GenerationError),
}

/// One generated graph ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedGraph {
    /// Edges in generation order, or sorted for datasets.
    pub edges: Vec<Edge>,
    /// Attempts the retry loop needed, when known.
    pub attempts: Option<usize>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Type shared by every generated graph.
    pub graph_type: GraphType,
    /// Vertex count shared by every generated graph.
    pub vertex_count: usize,
    /// Exponent used by power-law generation.
    pub gamma: Option<f64>,
    /// Generated graphs in order.
    pub graphs: Vec<RenderedGraph>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the parameters are rejected or generation
/// fails.
///
/// # Examples
/// ```
/// use clap::Parser;
/// use synthgraph_cli::cli::{Cli, run_cli};
///
/// let cli = Cli::try_parse_from([
///     "synthgraph", "generate", "--type", "simple", "-n", "6", "-e", "6", "-c", "2",
/// ])?;
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graphs[0].edges.len(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Generate(command) => {
            span.record("command", field::display("generate"));
            run_generate(&command)
        }
        Command::PowerLaw(command) => {
            span.record("command", field::display("power-law"));
            run_power_law(&command)
        }
    }
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(edges = field::Empty, count = command.count),
)]
pub(super) fn run_generate(command: &GenerateCommand) -> Result<ExecutionSummary, CliError> {
    let graph_type = GraphType::from(command.graph_type);
    let edges = resolve_edge_count(command)?;
    Span::current().record("edges", edges);

    let request = GenerationRequest::builder(graph_type, command.vertices, edges)
        .with_component_count(command.components)
        .with_balancing(command.balancing.into())
        .with_seed(command.seed)
        .with_max_attempts(command.max_attempts)
        .build()?;
    let graphs = generate_dataset(&request, command.count)?
        .into_iter()
        .map(|entry| RenderedGraph {
            attempts: Some(entry.graph().attempts()),
            edges: entry.graph().edges().to_vec(),
        })
        .collect::<Vec<_>>();

    info!(graphs = graphs.len(), "generate command completed");
    Ok(ExecutionSummary {
        graph_type,
        vertex_count: command.vertices,
        gamma: None,
        graphs,
    })
}

/// Returns the explicit edge count or the midpoint of the density band.
pub(super) fn resolve_edge_count(command: &GenerateCommand) -> Result<usize, CliError> {
    if let Some(edges) = command.edges {
        return Ok(edges);
    }
    let (low, high) = edge_range(
        command.graph_type.into(),
        command.vertices,
        command.components,
        command.density.into(),
    )?;
    Ok(low.midpoint(high))
}

#[instrument(name = "cli.power_law", err, skip(command), fields(gamma = field::Empty))]
pub(super) fn run_power_law(command: &PowerLawCommand) -> Result<ExecutionSummary, CliError> {
    let graph_type = GraphType::from(command.graph_type);
    let max_degree = command
        .max_degree
        .unwrap_or_else(|| command.vertices.saturating_sub(1));
    let mut builder = PowerLawRequest::builder(command.vertices, graph_type)
        .with_degree_bounds(command.min_degree, max_degree)
        .with_seed(command.seed);
    if let Some(gamma) = command.gamma {
        builder = builder.with_gamma(gamma);
    }
    let graph = generate_power_law(&builder.build()?)?;
    Span::current().record("gamma", graph.gamma());

    info!(edges = graph.edges().len(), "power-law command completed");
    Ok(ExecutionSummary {
        graph_type,
        vertex_count: command.vertices,
        gamma: Some(graph.gamma()),
        graphs: vec![RenderedGraph {
            edges: graph.into_edges(),
            attempts: None,
        }],
    })
}

/// Renders `summary` to `writer` as a header followed by one
/// `source<TAB>target` line per edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// # use synthgraph_cli::cli::{ExecutionSummary, RenderedGraph, render_summary};
/// # use synthgraph_core::{Edge, GraphType};
/// let summary = ExecutionSummary {
///     graph_type: GraphType::Simple,
///     vertex_count: 3,
///     gamma: None,
///     graphs: vec![RenderedGraph {
///         edges: vec![Edge::new(0, 1), Edge::new(1, 2)],
///         attempts: Some(1),
///     }],
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.ends_with("0\t1\n1\t2\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "type: {} (code {})",
        summary.graph_type,
        summary.graph_type.code()
    )?;
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    if let Some(gamma) = summary.gamma {
        writeln!(writer, "gamma: {gamma:.4}")?;
    }
    for (index, graph) in summary.graphs.iter().enumerate() {
        write!(writer, "# graph {index}: {} edges", graph.edges.len())?;
        if let Some(attempts) = graph.attempts {
            write!(writer, ", {attempts} attempts")?;
        }
        writeln!(writer)?;
        for edge in &graph.edges {
            writeln!(writer, "{}\t{}", edge.source(), edge.target())?;
        }
    }
    Ok(())
}
