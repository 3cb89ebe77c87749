use crate::graph::traits::Graph;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists.
///
/// Vertices are dense integers in `[0, vertex_count)`. Built once via
/// [`DirectedGraph::with_vertices`] plus [`DirectedGraph::add_edge`], then
/// treated as immutable for the lifetime of a single SSSP computation — this
/// crate has no notion of updating a graph after construction (see
/// Non-goals).
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertex_count: usize,
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
    /// Incoming edges for each vertex: vertex_id -> [(source_vertex, weight)]
    incoming_edges: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new directed graph with `vertices` vertices and no edges.
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedGraph {
            vertex_count: vertices,
            outgoing_edges: vec![Vec::new(); vertices],
            incoming_edges: vec![Vec::new(); vertices],
        }
    }

    /// Adds a directed edge `from -> to` with the given weight.
    ///
    /// Multi-edges and self-loops are both accepted verbatim; it is the
    /// caller's responsibility (the driver) to have already rejected
    /// out-of-range vertices and non-finite/negative weights.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) {
        self.outgoing_edges[from].push((to, weight));
        self.incoming_edges[to].push((from, weight));
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(Vec::len).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.incoming_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges
            .get(from)
            .is_some_and(|edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_vertex_and_edge_counts() {
        let mut g: DirectedGraph<f64> = DirectedGraph::with_vertices(3);
        g.add_edge(0, 1, 1.0);
        g.add_edge(1, 2, 2.0);

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(2, 0));
        assert_eq!(g.get_edge_weight(1, 2), Some(2.0));
    }

    #[test]
    fn tracks_incoming_edges() {
        let mut g: DirectedGraph<f64> = DirectedGraph::with_vertices(3);
        g.add_edge(0, 2, 5.0);
        g.add_edge(1, 2, 7.0);

        let mut incoming: Vec<_> = g.incoming_edges(2).collect();
        incoming.sort_by_key(|(v, _)| *v);
        assert_eq!(incoming, vec![(0, 5.0), (1, 7.0)]);
    }

    #[test]
    fn allows_multi_edges_and_self_loops() {
        let mut g: DirectedGraph<f64> = DirectedGraph::with_vertices(2);
        g.add_edge(0, 1, 3.0);
        g.add_edge(0, 1, 1.0);
        g.add_edge(0, 0, 4.0);

        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.outgoing_edges(0).count(), 3);
    }
}
