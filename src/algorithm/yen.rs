use std::collections::HashSet;
use std::fmt::Debug;
use std::time::{Duration, Instant};
use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{KShortestPaths, ShortestPathAlgorithm};
use crate::data_structures::CandidateSet;
use crate::graph::{DirectedGraph, MutableGraph, VertexId};
use crate::path::Path;
use crate::{Error, Result};

/// Yen's algorithm for the K shortest loopless paths between two vertices.
///
/// Each round takes the most recently accepted path and, for every vertex on
/// it except the target, temporarily removes the edges that would recreate an
/// accepted path plus every root-path vertex, searches a spur path from that
/// vertex, and restores the graph before moving to the next vertex.
#[derive(Debug, Clone)]
pub struct Yen<S = Dijkstra> {
    /// Single-pair search used for the first path and every spur path
    spur_search: S,
    /// Optional deadline, checked after each accepted path
    time_budget: Option<Duration>,
}

impl Yen<Dijkstra> {
    /// Create a Yen instance that searches spur paths with Dijkstra
    pub fn new() -> Self {
        Yen::with_spur_search(Dijkstra::new())
    }
}

impl Default for Yen<Dijkstra> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Yen<S> {
    /// Create a Yen instance with a custom spur search
    pub fn with_spur_search(spur_search: S) -> Self {
        Yen {
            spur_search,
            time_budget: None,
        }
    }

    /// Stop early, returning the paths found so far, once this much time has
    /// elapsed. Checked between rounds, so a round in progress always finishes.
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
        W: Float + Debug + Copy + Ord,
        S: ShortestPathAlgorithm<W, DirectedGraph<W>>,
    {
        let source = graph.vertex_id(source)?;
        let target = graph.vertex_id(target)?;
        self.ksp(graph, source, target, k)
    }
}

impl<W, G, S> KShortestPaths<W, G> for Yen<S>
where
    W: Float + Debug + Copy + Ord,
    G: MutableGraph<W>,
    S: ShortestPathAlgorithm<W, G>,
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
                let mut spurs = Vec::with_capacity(previous.size());
                for i in 0..previous.size() {
                    spurs.push(spur_candidate(&mut *graph, &self.spur_search, accepted, previous, i, target)?);
                }
                Ok(spurs)
            },
        )
    }

    fn name(&self) -> &'static str {
        "Yen"
    }

    fn is_loopless(&self) -> bool {
        true
    }
}

/// Shared driver for the sequential and parallel variants.
///
/// `spur_round` receives the graph, the accepted paths and the latest accepted
/// path, and returns one optional spur candidate per spur position, in position
/// order. It must leave the graph as it found it.
pub(crate) fn run_rounds<W, G, S, F>(
    spur_search: &S,
    graph: &mut G,
    source: VertexId,
    target: VertexId,
    k: usize,
    time_budget: Option<Duration>,
    mut spur_round: F,
) -> Result<Vec<Path<W>>>
where
    W: Float + Debug + Copy + Ord,
    G: MutableGraph<W>,
    S: ShortestPathAlgorithm<W, G>,
    F: FnMut(&mut G, &[Path<W>], &Path<W>) -> Result<Vec<Option<Path<W>>>>,
{
    if !graph.has_vertex(source) {
        return Err(Error::InvalidVertex(source));
    }
    if !graph.has_vertex(target) {
        return Err(Error::InvalidVertex(target));
    }
    if k == 0 {
        return Ok(Vec::new());
    }

    let started = Instant::now();
    let first = match spur_search.shortest_path(graph, source, target)? {
        Some(path) => path,
        None => {
            debug!("no path from {} to {}", source, target);
            return Ok(Vec::new());
        }
    };
    debug!("path 1 from {} to {} costs {:?}", source, target, first.total_cost());

    let mut accepted_fingerprints: HashSet<Vec<VertexId>> = HashSet::new();
    accepted_fingerprints.insert(first.vertices());
    let mut result = vec![first];
    let mut candidates = CandidateSet::new();

    while result.len() < k {
        let previous = &result[result.len() - 1];
        for candidate in spur_round(&mut *graph, &result[..], previous)?.into_iter().flatten() {
            candidates.insert(candidate);
        }

        let next = match next_accepted(&mut candidates, &accepted_fingerprints) {
            Some(path) => path,
            None => {
                debug!("candidates exhausted after {} paths", result.len());
                break;
            }
        };
        debug!(
            "path {} costs {:?} ({} candidates pooled)",
            result.len() + 1,
            next.total_cost(),
            candidates.len()
        );
        accepted_fingerprints.insert(next.vertices());
        result.push(next);

        if let Some(budget) = time_budget {
            if result.len() < k && started.elapsed() >= budget {
                warn!("time budget of {:?} exhausted after {} of {} paths", budget, result.len(), k);
                break;
            }
        }
    }

    Ok(result)
}

/// Computes the candidate diverging from `previous` at spur position `i`.
///
/// Removes the `i`-th edge of every accepted path sharing `previous`'s root,
/// removes every root vertex other than the spur node, searches the spur path,
/// then restores all removed edges before returning.
pub(crate) fn spur_candidate<W, G, S>(
    graph: &mut G,
    spur_search: &S,
    accepted: &[Path<W>],
    previous: &Path<W>,
    i: usize,
    target: VertexId,
) -> Result<Option<Path<W>>>
where
    W: Float + Debug + Copy + Ord,
    G: MutableGraph<W>,
    S: ShortestPathAlgorithm<W, G>,
{
    let spur_node = previous.edges()[i].from;
    let root = previous.clone_to(i);
    let mut removed = Vec::new();

    for path in accepted {
        if path.size() > i && path.shares_prefix(&root, i) {
            let next = path.edges()[i];
            if let Some(edge) = graph.remove_edge(next.from, next.to) {
                removed.push(edge);
            }
        }
    }

    // The root's `from` endpoints are exactly its vertices minus the spur node
    for edge in root.edges() {
        removed.extend(graph.remove_vertex(edge.from));
    }

    let spur = spur_search.shortest_path(graph, spur_node, target);
    let removed_count = removed.len();
    graph.add_edges(removed)?;

    let candidate = spur?.map(|spur_path| {
        let mut total = root;
        total.add_path(&spur_path);
        total
    });
    trace!(
        "spur at {} (position {}): removed {} edges, candidate {:?}",
        spur_node,
        i,
        removed_count,
        candidate.as_ref().map(|p| p.total_cost())
    );

    Ok(candidate)
}

/// Pops candidates until one that has not already been accepted turns up
fn next_accepted<W>(
    candidates: &mut CandidateSet<W>,
    accepted: &HashSet<Vec<VertexId>>,
) -> Option<Path<W>>
where
    W: Float + Debug + Copy + Ord,
{
    while let Some(path) = candidates.pop_min() {
        if !accepted.contains(&path.vertices()) {
            return Some(path);
        }
    }
    None
}
