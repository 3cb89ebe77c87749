use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait representing an immutable weighted directed graph.
///
/// The algorithm only ever needs forward adjacency; `incoming_edges` is kept
/// on the trait because it is cheap to provide from an adjacency-list graph
/// and is useful to callers doing their own diagnostics, but BMSSP, FindPivots
/// and the base-case mini-Dijkstra never call it.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph.
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex.
    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph.
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices.
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists.
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}
