use rstest::rstest;

use super::*;
use crate::error::GenerationErrorCode;

fn request(vertices: usize, graph_type: GraphType) -> PowerLawRequest {
    PowerLawRequest::builder(vertices, graph_type)
        .with_gamma(2.5)
        .with_seed(2024)
        .build()
        .expect("request is valid")
}

#[test]
fn large_multigraph_keeps_degrees_in_bounds_and_repeats_a_pair() {
    let graph = generate_power_law(&request(1_000, GraphType::Multigraph))
        .expect("request is valid");

    let DegreeSequence::Undirected(degrees) = graph.degrees() else {
        panic!("undirected types sample one sequence");
    };
    assert_eq!(degrees.len(), 1_000);
    assert!(degrees.iter().all(|degree| (1..=999).contains(degree)));

    let mut edges = graph.edges().to_vec();
    let total = edges.len();
    edges.sort_unstable();
    edges.dedup();
    assert!(edges.len() < total, "a repeated pair must exist");
}

#[rstest]
#[case::pseudograph(GraphType::Pseudograph)]
#[case::pseudograph_directed(GraphType::PseudographDirected)]
fn pseudograph_types_contain_a_self_loop(#[case] graph_type: GraphType) {
    let graph = generate_power_law(&request(200, graph_type)).expect("request is valid");
    assert!(graph.edges().iter().any(Edge::is_loop));
}

#[rstest]
#[case::directed(GraphType::Directed)]
#[case::multigraph_directed(GraphType::MultigraphDirected)]
fn directed_types_sample_balanced_sequences(#[case] graph_type: GraphType) {
    let graph = generate_power_law(&request(300, graph_type)).expect("request is valid");
    let DegreeSequence::Directed {
        out_degrees,
        in_degrees,
    } = graph.degrees()
    else {
        panic!("directed types sample two sequences");
    };
    assert_eq!(
        out_degrees.iter().sum::<usize>(),
        in_degrees.iter().sum::<usize>()
    );
    assert!(graph.edges().len() <= graph.degrees().edge_capacity() + 1);
}

#[test]
fn default_gamma_is_drawn_from_the_standard_range() {
    let request = PowerLawRequest::builder(50, GraphType::Simple)
        .build()
        .expect("request is valid");
    let graph = generate_power_law(&request).expect("request is valid");
    assert!((GAMMA_MIN..=GAMMA_MAX).contains(&graph.gamma()));
}

#[test]
fn equal_requests_produce_equal_graphs() {
    let request = request(120, GraphType::Multigraph);
    assert_eq!(
        generate_power_law(&request).expect("request is valid"),
        generate_power_law(&request).expect("request is valid")
    );
}

#[rstest]
#[case::single_vertex(PowerLawRequest::builder(1, GraphType::Simple))]
#[case::flat_exponent(PowerLawRequest::builder(10, GraphType::Simple).with_gamma(1.0))]
#[case::inverted_bounds(PowerLawRequest::builder(10, GraphType::Simple).with_degree_bounds(5, 2))]
fn build_rejects_invalid_parameters(#[case] builder: PowerLawRequestBuilder) {
    let err = builder.build().expect_err("parameters are invalid");
    assert_eq!(err.code(), GenerationErrorCode::InvalidParameters);
}

#[rstest]
#[case::multigraph(GraphType::Multigraph)]
#[case::multigraph_directed(GraphType::MultigraphDirected)]
fn two_vertex_multigraphs_always_repeat_a_pair(#[case] graph_type: GraphType) {
    for seed in 0..30 {
        let request = PowerLawRequest::builder(2, graph_type)
            .with_degree_bounds(2, 2)
            .with_seed(seed)
            .build()
            .expect("request is valid");
        let graph = generate_power_law(&request).expect("request is valid");

        let mut edges = graph.edges().to_vec();
        let total = edges.len();
        edges.sort_unstable();
        edges.dedup();
        assert!(edges.len() < total, "seed {seed} produced no repeated pair");
    }
}

#[test]
fn steep_exponent_terminates() {
    let request = PowerLawRequest::builder(20, GraphType::Simple)
        .with_gamma(1_100.0)
        .build()
        .expect("request is valid");
    let graph = generate_power_law(&request).expect("request is valid");
    let DegreeSequence::Undirected(degrees) = graph.degrees() else {
        panic!("undirected types sample one sequence");
    };
    assert!(degrees.iter().all(|degree| *degree == 1));
}
