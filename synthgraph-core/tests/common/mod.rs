use synthgraph_core::{
    BalancingStrategy, GeneratedGraph, GenerationRequest, GraphType, oracle,
};

/// Builds a request, panicking if the parameters are rejected.
#[must_use]
pub fn request(
    graph_type: GraphType,
    vertices: usize,
    edges: usize,
    components: usize,
    balancing: BalancingStrategy,
) -> GenerationRequest {
    GenerationRequest::builder(graph_type, vertices, edges)
        .with_component_count(components)
        .with_balancing(balancing)
        .build()
        .expect("request parameters must be admissible")
}

/// Returns the oracle's type and component count for `graph`.
#[must_use]
pub fn inspect(graph: &GeneratedGraph) -> (GraphType, usize) {
    let matrix = graph.adjacency().expect("edges must stay within the vertex range");
    (oracle::classify(&matrix), oracle::count_components(&matrix))
}
