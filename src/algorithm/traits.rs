use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::state::DistanceState;
use crate::Result;

/// Result of a shortest path algorithm execution.
///
/// Bundles the [`DistanceState`] a computation produced with the source it
/// ran from, so callers can read distances or (for debugging only — see
/// Non-goals) reconstruct a path via [`ShortestPathAlgorithm::path_to`].
#[derive(Debug)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy + Ord,
{
    pub state: DistanceState<W>,
    pub source: usize,
}

/// Trait for shortest path algorithms, implemented by both the BMSSP engine
/// and the Dijkstra oracle so either is usable polymorphically.
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    fn name(&self) -> &'static str;

    /// Reconstructs a path from the source to `target` as a sequence of
    /// vertices, by walking `pred` pointers. Debugging convenience only —
    /// the crate's primary output is the distance vector, not paths.
    fn path_to(&self, result: &ShortestPathResult<W>, target: usize) -> Option<Vec<usize>> {
        if target >= result.state.vertex_count() || result.state.dist(target) == W::infinity() {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = std::collections::HashSet::new();

        while current != result.source {
            if !visited.insert(current) {
                log::warn!("cycle detected in path reconstruction at vertex {current}");
                return None;
            }
            path.push(current);
            let pred = result.state.pred(current);
            if pred == current {
                return None;
            }
            current = pred;
        }

        path.push(result.source);
        path.reverse();
        Some(path)
    }
}
