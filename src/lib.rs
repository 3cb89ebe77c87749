//! Single-source shortest paths on directed, non-negatively weighted graphs
//! in O(m·log^(2/3) n), implementing the recursive frontier-reduction
//! algorithm of Duan, Mao, Mao, Shu and Yin (2025).
//!
//! The crate's primary surface is [`shortest_paths`]: given a vertex count,
//! an edge list, and a source, it returns the distance to every vertex. The
//! underlying [`algorithm::bmssp::Bmssp`] recursion, [`algorithm::find_pivots`]
//! pivot selection, and [`data_structures::PartialSortingStructure`] are
//! exposed for callers who want to drive the algorithm directly (tests,
//! benchmarking callers) rather than through the ergonomic entry point.

pub mod algorithm;
pub mod data_structures;
mod error;
pub mod graph;
pub mod state;

use ordered_float::OrderedFloat;

use algorithm::bmssp::Bmssp;
use algorithm::params::BmsspParams;
use graph::DirectedGraph;
use state::DistanceState;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use error::{Error, Result};
pub use graph::Graph;

/// Computes shortest-path distances from `source` to every vertex in a
/// directed graph with `n` vertices and the given `edges`.
///
/// `edges` is a sequence of `(u, v, w)` triples with `w ≥ 0`. Multi-edges and
/// self-loops are permitted. Edges referencing a vertex outside `[0, n)` are
/// dropped with a warning rather than rejecting the whole call.
///
/// Returns a vector of length `n` where `distances[source] == 0.0` and
/// `distances[v] == f64::INFINITY` for every unreachable `v`.
pub fn shortest_paths(n: usize, edges: &[(usize, usize, f64)], source: usize) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(Error::InvalidVertexCount(n));
    }
    if source >= n {
        return Err(Error::SourceOutOfRange {
            source_vertex: source,
            vertex_count: n,
        });
    }

    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::with_vertices(n);
    for &(u, v, w) in edges {
        if u >= n || v >= n {
            log::warn!("dropping edge ({u}, {v}, {w}) out of range for {n} vertices");
            continue;
        }
        if w.is_nan() || w == f64::NEG_INFINITY {
            return Err(Error::NonFiniteWeight(w));
        }
        if w < 0.0 {
            return Err(Error::NegativeWeight(w));
        }
        graph.add_edge(u, v, OrderedFloat(w));
    }

    log::info!(
        "shortest_paths: n={n}, edges={}, source={source}",
        edges.len()
    );

    let params = BmsspParams::from_vertex_count(n);
    let bmssp = Bmssp::new(params);
    let mut state: DistanceState<OrderedFloat<f64>> = DistanceState::new(n, source);

    bmssp.execute(
        &graph,
        params.max_level,
        OrderedFloat(f64::INFINITY),
        &[source],
        &mut state,
    );

    log::info!("shortest_paths: done");

    Ok(state
        .into_distances()
        .into_iter()
        .map(|d| d.into_inner())
        .collect())
}
