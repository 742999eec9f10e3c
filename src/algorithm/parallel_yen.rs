use std::fmt::Debug;
use std::time::Duration;
use num_traits::Float;
use rayon::prelude::*;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::yen::{run_rounds, spur_candidate};
use crate::algorithm::{KShortestPaths, ShortestPathAlgorithm};
use crate::graph::{DirectedGraph, MutableGraph, VertexId};
use crate::path::Path;
use crate::Result;

/// Yen's algorithm with the spur positions of each round searched in parallel.
///
/// Every spur task mutates its own clone of the graph, so no removal state is
/// shared between tasks. Spur results are merged in position order, which
/// makes the output identical to the sequential [`crate::Yen`].
#[derive(Debug, Clone)]
pub struct ParallelYen<S = Dijkstra> {
    spur_search: S,
    time_budget: Option<Duration>,
}

impl ParallelYen<Dijkstra> {
    pub fn new() -> Self {
        ParallelYen::with_spur_search(Dijkstra::new())
    }
}

impl Default for ParallelYen<Dijkstra> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> ParallelYen<S> {
    pub fn with_spur_search(spur_search: S) -> Self {
        ParallelYen {
            spur_search,
            time_budget: None,
        }
    }

    /// See [`crate::Yen::with_time_budget`]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    /// Label-based entry point for [`DirectedGraph`]
    pub fn ksp_by_label<W>(
        &self,
        graph: &mut DirectedGraph<W>,
        source: &str,
        target: &str,
        k: usize,
    ) -> Result<Vec<Path<W>>>
    where
        W: Float + Debug + Copy + Ord + Send + Sync,
        S: ShortestPathAlgorithm<W, DirectedGraph<W>> + Sync,
    {
        let source = graph.vertex_id(source)?;
        let target = graph.vertex_id(target)?;
        self.ksp(graph, source, target, k)
    }
}

impl<W, G, S> KShortestPaths<W, G> for ParallelYen<S>
where
    W: Float + Debug + Copy + Ord + Send + Sync,
    G: MutableGraph<W> + Clone + Sync,
    S: ShortestPathAlgorithm<W, G> + Sync,
{
    fn ksp(&self, graph: &mut G, source: VertexId, target: VertexId, k: usize) -> Result<Vec<Path<W>>> {
        run_rounds(
            &self.spur_search,
            graph,
            source,
            target,
            k,
            self.time_budget,
            |graph, accepted, previous| {
                let shared: &G = graph;
                (0..previous.size())
                    .into_par_iter()
                    .map(|i| {
                        let mut local = shared.clone();
                        spur_candidate(&mut local, &self.spur_search, accepted, previous, i, target)
                    })
                    .collect()
            },
        )
    }

    fn name(&self) -> &'static str {
        "ParallelYen"
    }

    fn is_loopless(&self) -> bool {
        true
    }
}
