use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::state::DistanceState;

/// FindPivots(B, S): k steps of bounded Bellman-Ford relaxation from `sources`,
/// followed by a forest-based pivot selection over the resulting work set.
///
/// Exits early, returning `sources` as pivots, once the work set exceeds
/// `k * |S|` — skipping the expensive forest pass exactly when the frontier
/// has exploded, rather than when it has stayed small. Builds the
/// shortest-path forest and selects pivots by subtree size only when the
/// work set stays within that bound through all k layers.
pub fn find_pivots<W, G>(
    graph: &G,
    bound: W,
    sources: &[usize],
    k: usize,
    state: &mut DistanceState<W>,
) -> (Vec<usize>, Vec<usize>)
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    log::debug!(
        "find_pivots: {} sources, bound={:?}, k={}",
        sources.len(),
        bound,
        k
    );

    let mut work_set = sources.to_vec();
    let mut frontier: VecDeque<usize> = sources.iter().copied().collect();

    let mut in_work_set = vec![false; state.vertex_count()];
    for &s in sources {
        in_work_set[s] = true;
    }

    let limit = k.saturating_mul(sources.len());
    let mut exploded = work_set.len() > limit;

    let mut step = 0;
    while !frontier.is_empty() && step < k && !exploded {
        let level_size = frontier.len();
        for _ in 0..level_size {
            let u = frontier.pop_front().unwrap();
            for (v, weight) in graph.outgoing_edges(u) {
                let candidate = state.dist(u) + weight;
                if candidate >= bound {
                    continue;
                }
                if state.relax(u, v, weight) && !in_work_set[v] {
                    in_work_set[v] = true;
                    work_set.push(v);
                    frontier.push_back(v);
                }
            }
        }

        if work_set.len() > limit {
            exploded = true;
            break;
        }
        step += 1;
    }

    if exploded {
        log::debug!(
            "find_pivots: work set exploded to {} (> {}), returning sources as pivots",
            work_set.len(),
            limit
        );
        return (sources.to_vec(), work_set);
    }

    // Build the shortest-path forest on W from the current predecessor
    // pointers, restricted to edges whose parent also lies in W.
    let source_set: HashSet<usize> = sources.iter().copied().collect();
    let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut has_parent_in_w = HashSet::new();

    for &v in &work_set {
        let parent = state.pred(v);
        if parent != v && in_work_set[parent] {
            children.entry(parent).or_default().push(v);
            has_parent_in_w.insert(v);
        }
    }

    let roots: Vec<usize> = sources
        .iter()
        .copied()
        .filter(|v| !has_parent_in_w.contains(v))
        .collect();

    let mut subtree_size = HashMap::new();
    for &root in &roots {
        let size = compute_subtree_size(root, &children);
        subtree_size.insert(root, size);
    }

    let mut pivots: Vec<usize> = sources
        .iter()
        .copied()
        .filter(|s| subtree_size.get(s).copied().unwrap_or(1) >= k)
        .collect();

    if pivots.is_empty() {
        pivots = sources.to_vec();
    }

    log::debug!(
        "find_pivots: {} pivots from {} sources, work set size {}",
        pivots.len(),
        sources.len(),
        work_set.len()
    );

    (pivots, work_set)
}

fn compute_subtree_size(root: usize, children: &HashMap<usize, Vec<usize>>) -> usize {
    let mut total = 1;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if let Some(kids) = children.get(&node) {
            total += kids.len();
            stack.extend(kids.iter().copied());
        }
    }
    total
}
