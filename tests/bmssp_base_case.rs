use frontier_sssp::algorithm::bmssp::Bmssp;
use frontier_sssp::algorithm::params::BmsspParams;
use frontier_sssp::graph::DirectedGraph;
use frontier_sssp::state::DistanceState;
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

#[test]
fn base_case_settles_expected_distances_on_a_small_dag() {
    let _ = env_logger::try_init();

    let mut g: DirectedGraph<W> = DirectedGraph::with_vertices(5);
    g.add_edge(0, 1, OrderedFloat(1.0));
    g.add_edge(1, 2, OrderedFloat(1.0));
    g.add_edge(0, 2, OrderedFloat(3.0));
    g.add_edge(2, 3, OrderedFloat(1.0));
    g.add_edge(1, 3, OrderedFloat(4.0));
    g.add_edge(3, 4, OrderedFloat(1.0));
    g.add_edge(0, 4, OrderedFloat(10.0));

    let params = BmsspParams::with_explicit(5, 2, 1);
    let bmssp = Bmssp::new(params);
    let mut state: DistanceState<W> = DistanceState::new(5, 0);

    let result = bmssp.execute(&g, 0, OrderedFloat(f64::INFINITY), &[0], &mut state);

    assert!(result.vertices.contains(&0));
    assert!(result.vertices.contains(&1));
    assert_eq!(state.dist(0), OrderedFloat(0.0));
    assert_eq!(state.dist(1), OrderedFloat(1.0));
    assert_eq!(state.dist(2), OrderedFloat(2.0));
}

#[test]
fn base_case_respects_an_explicit_bound() {
    let mut g: DirectedGraph<W> = DirectedGraph::with_vertices(3);
    g.add_edge(0, 1, OrderedFloat(1.0));
    g.add_edge(1, 2, OrderedFloat(10.0));

    let params = BmsspParams::with_explicit(3, 2, 1);
    let bmssp = Bmssp::new(params);
    let mut state: DistanceState<W> = DistanceState::new(3, 0);

    bmssp.execute(&g, 0, OrderedFloat(5.0), &[0], &mut state);

    assert_eq!(state.dist(1), OrderedFloat(1.0));
    assert_eq!(state.dist(2), OrderedFloat(f64::INFINITY));
}
