use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::state::DistanceState;
use crate::{Error, Result};

/// Textbook Dijkstra, used only as the correctness oracle for property
/// tests — the core driver never dispatches to this as a fast path.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceOutOfRange {
                source_vertex: source,
                vertex_count: graph.vertex_count(),
            });
        }

        let mut state = DistanceState::new(graph.vertex_count(), source);
        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            if dist_u > state.dist(u) {
                continue;
            }
            for (v, weight) in graph.outgoing_edges(u) {
                if state.relax(u, v, weight) {
                    queue.push(v, state.dist(v));
                }
            }
        }

        Ok(ShortestPathResult { state, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    type W = OrderedFloat<f64>;

    #[test]
    fn finds_shortest_distances_on_a_diamond() {
        let mut g: DirectedGraph<W> = DirectedGraph::with_vertices(4);
        g.add_edge(0, 1, OrderedFloat(1.0));
        g.add_edge(0, 2, OrderedFloat(4.0));
        g.add_edge(1, 2, OrderedFloat(1.0));
        g.add_edge(2, 3, OrderedFloat(1.0));

        let dijkstra = Dijkstra::new();
        let result = dijkstra.compute_shortest_paths(&g, 0).unwrap();

        assert_eq!(result.state.dist(0), OrderedFloat(0.0));
        assert_eq!(result.state.dist(1), OrderedFloat(1.0));
        assert_eq!(result.state.dist(2), OrderedFloat(2.0));
        assert_eq!(result.state.dist(3), OrderedFloat(3.0));
    }

    #[test]
    fn rejects_out_of_range_source() {
        let g: DirectedGraph<W> = DirectedGraph::with_vertices(2);
        let dijkstra = Dijkstra::new();
        assert!(dijkstra.compute_shortest_paths(&g, 5).is_err());
    }
}
