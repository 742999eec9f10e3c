use std::fmt::Debug;
use num_traits::Float;
use crate::graph::{Edge, Graph, VertexId};
use crate::path::Path;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug + Copy,
{
    /// Distances from source to each vertex. Only settled vertices carry final
    /// distances when the search stopped early at a target.
    pub distances: Vec<Option<W>>,

    /// Edge used to reach each vertex in the shortest path tree
    pub predecessors: Vec<Option<Edge<W>>>,

    /// Source vertex ID
    pub source: VertexId,
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Lowest-cost path from `source` to `target` in the current graph state,
    /// or `None` if the target is unreachable
    fn shortest_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<Option<Path<W>>> {
        if !graph.has_vertex(target) {
            return Err(crate::Error::InvalidVertex(target));
        }
        let result = self.compute_shortest_paths(graph, source)?;
        Ok(self.get_path(&result, target))
    }

    /// Rebuild the path from the result's source to `target` by following
    /// predecessor edges
    fn get_path(&self, result: &ShortestPathResult<W>, target: VertexId) -> Option<Path<W>> {
        if target >= result.predecessors.len() || result.distances[target].is_none() {
            return None;
        }
        if target == result.source {
            return Some(Path::new(result.source));
        }

        let mut edges = Vec::new();
        let mut current = target;
        while current != result.source {
            let edge = result.predecessors[current]?;
            edges.push(edge);
            current = edge.from;

            // A predecessor chain longer than the graph means a corrupt tree
            if edges.len() > result.predecessors.len() {
                return None;
            }
        }
        edges.reverse();

        Path::from_edges(edges)
    }
}

/// Trait for K-shortest-paths algorithms
pub trait KShortestPaths<W, G>
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Up to `k` paths from `source` to `target`, ordered by non-decreasing cost.
    /// Returns fewer paths when fewer exist and none when the target is unreachable.
    fn ksp(&self, graph: &mut G, source: VertexId, target: VertexId, k: usize) -> Result<Vec<Path<W>>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Whether every produced path is guaranteed to be simple
    fn is_loopless(&self) -> bool;
}
