//! Structural classification and connectivity counting.
//!
//! The oracle is the acceptance test for the randomised generators: an
//! attempt is only returned to the caller when the type reported here and
//! the component count agree with the request.

use crate::{edges::AdjacencyMatrix, graph_type::GraphType};

/// Classifies the graph stored in `matrix`.
///
/// Any cell above one marks a repeated edge, any non-zero diagonal cell a
/// self-loop, and any asymmetric pair of cells a directed graph. The three
/// flags are combined with [`GraphType::from_traits`].
///
/// # Examples
/// ```
/// use synthgraph_core::{AdjacencyMatrix, Edge, GraphType, oracle};
///
/// let edges = [Edge::new(0, 1), Edge::new(1, 2)];
/// let matrix = AdjacencyMatrix::from_edges(3, &edges, true)?;
/// assert_eq!(oracle::classify(&matrix), GraphType::Directed);
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
#[must_use]
pub fn classify(matrix: &AdjacencyMatrix) -> GraphType {
    let vertices = matrix.vertex_count();
    let mut multi_edges = false;
    let mut self_loops = false;
    let mut directed = false;

    for row in 0..vertices {
        for (column, &count) in matrix.row(row).iter().enumerate() {
            multi_edges |= count > 1;
            self_loops |= row == column && count > 0;
            directed |= column > row && count != matrix.get(column, row);
        }
    }

    GraphType::from_traits(directed, multi_edges, self_loops)
}

/// Counts weakly connected components.
///
/// Runs an iterative depth-first search from every unvisited vertex,
/// following a cell in either direction, and returns the number of
/// launches. Isolated vertices count as components of their own.
///
/// # Examples
/// ```
/// use synthgraph_core::{AdjacencyMatrix, Edge, oracle};
///
/// let matrix = AdjacencyMatrix::from_edges(3, &[Edge::new(0, 1)], false)?;
/// assert_eq!(oracle::count_components(&matrix), 2);
/// # Ok::<(), synthgraph_core::GenerationError>(())
/// ```
#[must_use]
pub fn count_components(matrix: &AdjacencyMatrix) -> usize {
    let vertices = matrix.vertex_count();
    let mut visited = vec![false; vertices];
    let mut stack = Vec::new();
    let mut components = 0;

    for start in 0..vertices {
        if visited.get(start).copied().unwrap_or(true) {
            continue;
        }
        components += 1;
        stack.push(start);
        while let Some(vertex) = stack.pop() {
            let Some(seen) = visited.get_mut(vertex) else {
                continue;
            };
            if *seen {
                continue;
            }
            *seen = true;
            for neighbour in 0..vertices {
                let linked = matrix.get(vertex, neighbour) > 0 || matrix.get(neighbour, vertex) > 0;
                if linked && !visited.get(neighbour).copied().unwrap_or(true) {
                    stack.push(neighbour);
                }
            }
        }
    }

    components
}
