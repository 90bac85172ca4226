//! Proptest runners and parameterised cases for generation properties.

use proptest::prelude::*;

use crate::test_utils::suite_proptest_config;
use crate::{BalancingStrategy, GenerationRequest, GraphType, Mismatch};

use super::invariants::{
    exhaustion_is_expected, run_balanced_vertex_split, run_degree_balance, run_determinism,
    run_generation_invariants,
};
use super::strategies::request_strategy;

/// Builds a request for the parameterised cases, panicking on rejection.
fn request(
    graph_type: GraphType,
    vertices: usize,
    edges: usize,
    components: usize,
    seed: u64,
) -> GenerationRequest {
    GenerationRequest::builder(graph_type, vertices, edges)
        .with_component_count(components)
        .with_balancing(BalancingStrategy::Random)
        .with_seed(seed)
        .build()
        .expect("parameterised request must be admissible")
}

/// Generates an rstest-parameterised function running `$runner` over one
/// comfortable request per graph type and path.
macro_rules! parameterised_property_test {
    ($test_name:ident, $runner:path, $expectation:expr) => {
        #[rstest::rstest]
        #[case::simple_components(GraphType::Simple, 12, 14, 3)]
        #[case::simple_direct(GraphType::Simple, 12, 30, 0)]
        #[case::directed_components(GraphType::Directed, 12, 20, 2)]
        #[case::directed_direct(GraphType::Directed, 8, 40, 0)]
        #[case::multigraph_components(GraphType::Multigraph, 12, 18, 2)]
        #[case::multigraph_direct(GraphType::Multigraph, 6, 20, 0)]
        #[case::multigraph_directed_components(GraphType::MultigraphDirected, 12, 18, 2)]
        #[case::pseudograph_components(GraphType::Pseudograph, 12, 20, 3)]
        #[case::pseudograph_direct(GraphType::Pseudograph, 5, 5, 0)]
        #[case::pseudograph_directed_components(GraphType::PseudographDirected, 12, 24, 2)]
        #[case::pseudograph_directed_direct(GraphType::PseudographDirected, 6, 15, 0)]
        fn $test_name(
            #[case] graph_type: GraphType,
            #[case] vertices: usize,
            #[case] edges: usize,
            #[case] components: usize,
            #[values(7, 42, 999)] seed: u64,
        ) {
            let request = request(graph_type, vertices, edges, components, seed);
            $runner(&request).expect($expectation);
        }
    };
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn accepted_graphs_match_request(request in request_strategy()) {
        run_generation_invariants(&request)?;
    }

    #[test]
    fn generation_is_deterministic(request in request_strategy()) {
        run_determinism(&request)?;
    }
}

proptest! {
    #![proptest_config(suite_proptest_config(256))]

    #[test]
    fn balanced_vertex_split_is_even(
        (vertices, components) in (1_usize..200).prop_flat_map(|v| (Just(v), 1..=v)),
    ) {
        run_balanced_vertex_split(vertices, components)?;
    }

    #[test]
    fn degree_balance_equalises_sums(
        (out_degrees, in_degrees) in (1_usize..32).prop_flat_map(|len| (
            prop::collection::vec(0_usize..20, len),
            prop::collection::vec(0_usize..20, len),
        )),
        seed in any::<u64>(),
    ) {
        run_degree_balance(out_degrees, in_degrees, seed)?;
    }
}

parameterised_property_test!(
    generation_invariants_hold_for_fixed_requests,
    run_generation_invariants,
    "generation invariants must hold"
);

parameterised_property_test!(
    determinism_holds_for_fixed_requests,
    run_determinism,
    "generation must be deterministic"
);

#[rstest::rstest]
#[case::random_tail(
    GraphType::Simple,
    3,
    Mismatch::TailOutOfBounds { allocated: 9, min: 2, max: Some(3) },
    true
)]
#[case::directed_symmetry(
    GraphType::Directed,
    2,
    Mismatch::TypeMismatch { expected: GraphType::Directed, actual: GraphType::Simple },
    true
)]
#[case::undirected_type_rejection(
    GraphType::Multigraph,
    2,
    Mismatch::TypeMismatch { expected: GraphType::Multigraph, actual: GraphType::Simple },
    false
)]
#[case::component_count_rejection(
    GraphType::Simple,
    3,
    Mismatch::ComponentCountMismatch { expected: 3, actual: 2 },
    false
)]
#[case::direct_path(
    GraphType::Directed,
    0,
    Mismatch::TypeMismatch { expected: GraphType::Directed, actual: GraphType::Simple },
    false
)]
fn only_parameter_driven_exhaustion_is_tolerated(
    #[case] graph_type: GraphType,
    #[case] components: usize,
    #[case] mismatch: Mismatch,
    #[case] expected: bool,
) {
    let request = request(graph_type, 12, 14, components, 1);
    assert_eq!(exhaustion_is_expected(&request, &mismatch), expected);
}
