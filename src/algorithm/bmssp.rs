use num_traits::{Float, Zero};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;

use crate::algorithm::find_pivots::find_pivots;
use crate::algorithm::params::BmsspParams;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::PartialSortingStructure;
use crate::graph::Graph;
use crate::state::DistanceState;
use crate::{Error, Result};

/// Result of a single BMSSP call: the tightened bound `B'` and the set of
/// vertices settled by this call.
#[derive(Debug)]
pub struct BmsspResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub new_bound: W,
    pub vertices: Vec<usize>,
}

/// Bounded multi-source shortest path recursion.
///
/// Threads a single [`DistanceState`] through the recursion rather than raw
/// `Vec<W>`/`Vec<Option<usize>>` pairs, and uses [`PartialSortingStructure`]
/// for each level's bucket structure.
#[derive(Debug)]
pub struct Bmssp {
    params: BmsspParams,
}

impl Bmssp {
    pub fn new(params: BmsspParams) -> Self {
        Bmssp { params }
    }

    pub fn execute<W, G>(
        &self,
        graph: &G,
        level: usize,
        bound: W,
        sources: &[usize],
        state: &mut DistanceState<W>,
    ) -> BmsspResult<W>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        debug_assert!(!sources.is_empty(), "BMSSP called with an empty source set");

        if level == 0 {
            return self.base_case(graph, bound, sources, state);
        }

        let k = self.params.k;
        let (pivots, work_set) = find_pivots(graph, bound, sources, k, state);

        let block_size = self.params.block_size(level);
        let mut d = PartialSortingStructure::new(block_size, bound);
        for &pivot in &pivots {
            if state.dist(pivot) < bound {
                d.insert(pivot, state.dist(pivot));
            }
        }

        let mut new_bound = pivots
            .iter()
            .map(|&p| state.dist(p))
            .filter(|&dist| dist < W::infinity())
            .fold(bound, |acc, dist| if dist < acc { dist } else { acc });

        let mut settled: HashSet<usize> = HashSet::new();
        let workload_cap = self.params.workload_cap(level);

        while settled.len() < workload_cap && !d.is_empty() {
            let (si, bi) = d.pull(block_size);
            if si.is_empty() {
                break;
            }

            let result = self.execute(graph, level - 1, bi, &si, state);
            let ui = result.vertices;
            let new_sub_bound = result.new_bound;

            for &u in &ui {
                settled.insert(u);
            }

            let mut batch = Vec::new();
            for &u in &ui {
                for (v, weight) in graph.outgoing_edges(u) {
                    if state.relax(u, v, weight) {
                        let dv = state.dist(v);
                        if dv >= bi && dv < bound {
                            d.insert(v, dv);
                        } else if dv >= new_sub_bound && dv < bi {
                            batch.push((v, dv));
                        }
                    }
                }
            }

            for &x in &si {
                let dx = state.dist(x);
                if dx >= new_sub_bound && dx < bi {
                    batch.push((x, dx));
                }
            }

            if !batch.is_empty() {
                d.batch_prepend(batch);
            }

            new_bound = new_sub_bound;
        }

        let final_bound = if d.is_empty() { bound } else { new_bound };
        for &v in &work_set {
            if state.dist(v) < final_bound {
                settled.insert(v);
            }
        }

        log::debug!(
            "bmssp level={} sources={} -> settled={} bound={:?}",
            level,
            sources.len(),
            settled.len(),
            final_bound
        );

        BmsspResult {
            new_bound: final_bound,
            vertices: settled.into_iter().collect(),
        }
    }

    /// Base case (level = 0): bounded Dijkstra seeded from every vertex in
    /// `sources`, capped at `k + 1` settled vertices.
    fn base_case<W, G>(
        &self,
        graph: &G,
        bound: W,
        sources: &[usize],
        state: &mut DistanceState<W>,
    ) -> BmsspResult<W>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let k = self.params.k;
        let mut heap = BinaryHeap::new();
        let mut settled = Vec::new();
        let mut visited = vec![false; state.vertex_count()];

        for &s in sources {
            heap.push(Reverse((state.dist(s), state.path_len(s), s)));
        }

        while let Some(Reverse((dist_u, _, u))) = heap.pop() {
            if visited[u] || dist_u > state.dist(u) || dist_u >= bound {
                continue;
            }
            visited[u] = true;
            settled.push(u);

            if settled.len() > k {
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if state.relax(u, v, weight) && state.dist(v) < bound {
                    heap.push(Reverse((state.dist(v), state.path_len(v), v)));
                }
            }
        }

        if settled.len() <= k {
            return BmsspResult {
                new_bound: bound,
                vertices: settled,
            };
        }

        let mut distances: Vec<W> = settled.iter().map(|&v| state.dist(v)).collect();
        distances.sort();
        let new_bound = distances[k];

        let vertices = settled
            .into_iter()
            .filter(|&v| state.dist(v) < new_bound)
            .collect();

        BmsspResult { new_bound, vertices }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Bmssp
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BMSSP (O(m log^(2/3) n))"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceOutOfRange {
                source_vertex: source,
                vertex_count: graph.vertex_count(),
            });
        }

        let mut state = DistanceState::new(graph.vertex_count(), source);
        self.execute(
            graph,
            self.params.max_level,
            W::infinity(),
            &[source],
            &mut state,
        );

        Ok(ShortestPathResult { state, source })
    }
}
