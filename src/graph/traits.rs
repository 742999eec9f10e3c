use std::fmt::Debug;
use num_traits::Float;

use crate::graph::{Edge, VertexId};
use crate::Result;

/// Trait representing a weighted directed graph
pub trait Graph<W>: Debug
where
    W: Float + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges currently present in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in ascending target order
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns an iterator over the incoming edges to a vertex, in ascending source order
    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge, `None` if the vertices are disconnected
    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W>;

    /// Successors of a vertex
    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.outgoing_edges(vertex).map(|(v, _)| v).collect()
    }

    /// Predecessors of a vertex
    fn predecessors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.incoming_edges(vertex).map(|(u, _)| u).collect()
    }
}

/// Trait for mutable graph operations.
///
/// Removal hands the removed edges back so the caller can restore them with
/// [`MutableGraph::add_edges`]. Removing and then restoring the returned edges
/// must leave the graph equal to its state before the removal.
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug + Copy,
{
    /// Inserts a directed edge, overwriting the weight of an existing one
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()>;

    /// Removes an edge, returning it if it was present
    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<Edge<W>>;

    /// Removes every edge touching `vertex` (both directions) and returns them.
    /// The vertex itself stays in the graph.
    fn remove_vertex(&mut self, vertex: VertexId) -> Vec<Edge<W>>;

    /// Restores previously removed edges with their exact weights
    fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        for edge in edges {
            self.add_edge(edge.from, edge.to, edge.weight)?;
        }
        Ok(())
    }
}
