//! The closed set of graph classes the engine can generate.
//!
//! Each class is identified by a stable numeric code (0, 1, 20, 21, 30, 31)
//! which downstream tooling uses in file names and reports. Structural
//! permissions (direction, repeated edges, self-loops) are derived from the
//! variant rather than inspected from the code.

use std::fmt;

use crate::error::GenerationError;

/// Graph class requested from, and reported by, the engine.
///
/// # Examples
/// ```
/// use synthgraph_core::GraphType;
///
/// let kind = GraphType::from_code(21).expect("21 is a known code");
/// assert_eq!(kind, GraphType::MultigraphDirected);
/// assert!(kind.is_directed());
/// assert!(kind.allows_multi_edges());
/// assert!(!kind.allows_self_loops());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphType {
    /// Undirected, no repeated edges, no self-loops.
    Simple,
    /// Directed, no repeated edges, no self-loops.
    Directed,
    /// Undirected with at least one repeated edge and no self-loops.
    Multigraph,
    /// Directed with at least one repeated edge and no self-loops.
    MultigraphDirected,
    /// Undirected with at least one self-loop; repeated edges permitted.
    Pseudograph,
    /// Directed with at least one self-loop and one repeated edge.
    PseudographDirected,
}

impl GraphType {
    /// Every graph type in code order.
    pub const ALL: [Self; 6] = [
        Self::Simple,
        Self::Directed,
        Self::Multigraph,
        Self::MultigraphDirected,
        Self::Pseudograph,
        Self::PseudographDirected,
    ];

    /// Resolves a numeric type code.
    ///
    /// # Errors
    /// Returns [`GenerationError::UnknownGraphType`] when `code` is not one of
    /// 0, 1, 20, 21, 30 or 31.
    pub fn from_code(code: u16) -> Result<Self, GenerationError> {
        match code {
            0 => Ok(Self::Simple),
            1 => Ok(Self::Directed),
            20 => Ok(Self::Multigraph),
            21 => Ok(Self::MultigraphDirected),
            30 => Ok(Self::Pseudograph),
            31 => Ok(Self::PseudographDirected),
            _ => Err(GenerationError::UnknownGraphType { code }),
        }
    }

    /// Returns the stable numeric code for this type.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Simple => 0,
            Self::Directed => 1,
            Self::Multigraph => 20,
            Self::MultigraphDirected => 21,
            Self::Pseudograph => 30,
            Self::PseudographDirected => 31,
        }
    }

    /// Returns the human-readable label used in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "Simple",
            Self::Directed => "Digraph",
            Self::Multigraph => "Multigraph",
            Self::MultigraphDirected => "Multigraph-Directed",
            Self::Pseudograph => "Pseudograph",
            Self::PseudographDirected => "Pseudograph-Directed",
        }
    }

    /// Returns `true` when edges are ordered pairs.
    #[must_use]
    pub const fn is_directed(self) -> bool {
        matches!(
            self,
            Self::Directed | Self::MultigraphDirected | Self::PseudographDirected
        )
    }

    /// Returns `true` when the same pair may be connected more than once.
    #[must_use]
    pub const fn allows_multi_edges(self) -> bool {
        matches!(
            self,
            Self::Multigraph
                | Self::MultigraphDirected
                | Self::Pseudograph
                | Self::PseudographDirected
        )
    }

    /// Returns `true` when an edge may start and end on the same vertex.
    #[must_use]
    pub const fn allows_self_loops(self) -> bool {
        matches!(self, Self::Pseudograph | Self::PseudographDirected)
    }

    /// Returns `true` when a graph of this type must contain a repeated edge
    /// to be classified as this type.
    ///
    /// The undirected pseudograph is recognised by its self-loop alone, while
    /// the directed pseudograph is only distinguished from a digraph when it
    /// carries both a loop and a repeated edge.
    #[must_use]
    pub const fn requires_multi_edges(self) -> bool {
        matches!(
            self,
            Self::Multigraph | Self::MultigraphDirected | Self::PseudographDirected
        )
    }

    /// Returns `true` when a graph of this type must contain a self-loop.
    #[must_use]
    pub const fn requires_self_loops(self) -> bool {
        self.allows_self_loops()
    }

    /// Combines observed structural traits into a graph type.
    ///
    /// The precedence mirrors the classification table: a directed graph is
    /// only a directed pseudograph when it has both repeated edges and loops,
    /// and an undirected graph with a loop is a pseudograph regardless of
    /// repeated edges.
    ///
    /// # Examples
    /// ```
    /// use synthgraph_core::GraphType;
    ///
    /// assert_eq!(GraphType::from_traits(true, false, true), GraphType::Directed);
    /// assert_eq!(GraphType::from_traits(false, true, true), GraphType::Pseudograph);
    /// ```
    #[must_use]
    pub const fn from_traits(directed: bool, multi_edges: bool, self_loops: bool) -> Self {
        match (directed, multi_edges, self_loops) {
            (true, true, true) => Self::PseudographDirected,
            (true, true, false) => Self::MultigraphDirected,
            (true, false, _) => Self::Directed,
            (false, _, true) => Self::Pseudograph,
            (false, true, false) => Self::Multigraph,
            (false, false, false) => Self::Simple,
        }
    }

    /// Returns the reference edge count `g_max` used for density reporting.
    ///
    /// Simple and multigraph types use the complete-graph size; directed
    /// variants double it; pseudograph variants add one loop per vertex.
    #[must_use]
    pub const fn max_edges(self, vertex_count: usize) -> usize {
        let pairs = vertex_count.saturating_mul(vertex_count.saturating_sub(1));
        let base = if self.is_directed() { pairs } else { pairs / 2 };
        if self.allows_self_loops() {
            base.saturating_add(vertex_count)
        } else {
            base
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u16> for GraphType {
    type Error = GenerationError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
