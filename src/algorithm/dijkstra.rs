use std::fmt::Debug;
use log::trace;
use num_traits::Float;

use crate::graph::{Edge, Graph, VertexId};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::path::Path;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Ties between equal tentative distances are settled in ascending vertex id
/// order, and a predecessor is only replaced on a strict improvement, so the
/// same graph always yields the same tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Label-setting search from `source`. Stops as soon as `target` is settled
    /// when one is given.
    fn search<W, G>(&self, graph: &G, source: VertexId, target: Option<VertexId>) -> Result<ShortestPathResult<W>>
    where
        W: Float + Debug + Copy + Ord,
        G: Graph<W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<Edge<W>>> = vec![None; n];
        let mut settled = vec![false; n];
        let mut settled_count = 0usize;

        distances[source] = Some(W::zero());
        let mut queue = MinHeap::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry for an already settled vertex
            if settled[u] {
                continue;
            }
            settled[u] = true;
            settled_count += 1;

            if Some(u) == target {
                break;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                let new_dist = dist_u + weight;

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(Edge::new(u, v, weight));
                    queue.push(v, new_dist);
                }
            }
        }

        trace!("dijkstra from {} settled {} of {} vertices", source, settled_count, n);

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult<W>> {
        self.search(graph, source, None)
    }

    fn shortest_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<Option<Path<W>>> {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        let result = self.search(graph, source, Some(target))?;
        Ok(<Self as ShortestPathAlgorithm<W, G>>::get_path(self, &result, target))
    }
}
