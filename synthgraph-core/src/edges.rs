//! Edge and adjacency representations shared by every generator.
//!
//! Generators emit an [`EdgeList`]; the oracle works over the dense
//! [`AdjacencyMatrix`] built from it. Repeated edges and self-loops are
//! ordinary data here, never errors.

use crate::error::{GenerationError, Result};

/// A single `(source, target)` pair.
///
/// Undirected generators always emit the canonical orientation
/// `source <= target` so equal pairs compare equal.
///
/// # Examples
/// ```
/// use synthgraph_core::Edge;
///
/// let edge = Edge::new(4, 1);
/// assert_eq!(edge.canonical(false), Edge::new(1, 4));
/// assert_eq!(edge.canonical(true), edge);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Creates an edge, normalising the orientation for undirected graphs.
    #[must_use]
    pub const fn oriented(source: usize, target: usize, directed: bool) -> Self {
        Self::new(source, target).canonical(directed)
    }

    /// Returns the tail vertex.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Returns the head vertex.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns the key used to detect repeated edges.
    ///
    /// Directed edges keep their orientation; undirected edges are sorted so
    /// `(u, v)` and `(v, u)` collide.
    #[must_use]
    pub const fn canonical(self, directed: bool) -> Self {
        if directed || self.source <= self.target {
            self
        } else {
            Self::new(self.target, self.source)
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

/// Ordered sequence of edges produced by a generator.
pub type EdgeList = Vec<Edge>;

/// Dense multiplicity matrix over `vertex_count` vertices.
///
/// Cell `(i, j)` counts the edges from `i` to `j`. Undirected edges are
/// mirrored into both cells; a self-loop increments its diagonal cell once.
///
/// # Examples
/// ```
/// use synthgraph_core::{AdjacencyMatrix, Edge};
///
/// let edges = [Edge::new(0, 1), Edge::new(0, 1), Edge::new(2, 2)];
/// let matrix = AdjacencyMatrix::from_edges(3, &edges, false)?;
/// assert_eq!(matrix.get(1, 0), 2);
/// assert_eq!(matrix.get(2, 2), 1);
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    cells: Vec<usize>,
}

impl AdjacencyMatrix {
    /// Creates an empty matrix.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            cells: vec![0; vertex_count.saturating_mul(vertex_count)],
        }
    }

    /// Builds the matrix for `edges`, mirroring them unless `directed`.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidParameters`] when an edge references
    /// a vertex outside `0..vertex_count`.
    pub fn from_edges(vertex_count: usize, edges: &[Edge], directed: bool) -> Result<Self> {
        let mut matrix = Self::new(vertex_count);
        for edge in edges {
            matrix.add_edge(*edge, directed)?;
        }
        Ok(matrix)
    }

    /// Records one more edge.
    ///
    /// # Errors
    /// Returns [`GenerationError::InvalidParameters`] when an endpoint is out
    /// of range.
    pub fn add_edge(&mut self, edge: Edge, directed: bool) -> Result<()> {
        self.increment(edge.source(), edge.target())?;
        if !directed && !edge.is_loop() {
            self.increment(edge.target(), edge.source())?;
        }
        Ok(())
    }

    fn increment(&mut self, row: usize, column: usize) -> Result<()> {
        let index = self.index(row, column).ok_or_else(|| {
            GenerationError::invalid(format!(
                "edge ({row}, {column}) references a vertex outside 0..{}",
                self.vertex_count
            ))
        })?;
        if let Some(cell) = self.cells.get_mut(index) {
            *cell += 1;
        }
        Ok(())
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.vertex_count && column < self.vertex_count)
            .then(|| row * self.vertex_count + column)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the multiplicity of cell `(row, column)`, or zero when out of
    /// range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> usize {
        self.index(row, column)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Returns one row of the matrix.
    #[must_use]
    pub fn row(&self, row: usize) -> &[usize] {
        let start = row.saturating_mul(self.vertex_count);
        self.cells
            .get(start..start.saturating_add(self.vertex_count))
            .unwrap_or(&[])
    }

    /// Returns the non-zero cells of every row as `(neighbour, multiplicity)`.
    #[must_use]
    pub fn adjacency_list(&self) -> Vec<Vec<(usize, usize)>> {
        (0..self.vertex_count)
            .map(|row| {
                self.row(row)
                    .iter()
                    .enumerate()
                    .filter(|(_, count)| **count > 0)
                    .map(|(column, count)| (column, *count))
                    .collect()
            })
            .collect()
    }
}
