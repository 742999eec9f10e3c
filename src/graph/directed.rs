use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::{Edge, LabelMap, VertexId};
use crate::{Error, Result};
use num_traits::Float;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// A labelled directed graph using ordered adjacency maps.
///
/// Adjacency is kept in `BTreeMap`/`BTreeSet`s so that neighbor enumeration is
/// deterministic and so that removing and re-adding the same edges leaves the
/// indexes exactly as they were.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Vertex labels, indexed by vertex id
    labels: LabelMap,

    /// Outgoing edges for each vertex: vertex_id -> {target_vertex -> weight}
    outgoing_edges: Vec<BTreeMap<VertexId, W>>,

    /// Incoming edges for each vertex: vertex_id -> {source_vertex}
    incoming_edges: Vec<BTreeSet<VertexId>>,

    /// Number of edges currently present
    edge_count: usize,
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            labels: LabelMap::new(),
            outgoing_edges: Vec::new(),
            incoming_edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            labels: LabelMap::with_capacity(vertices),
            outgoing_edges: Vec::with_capacity(vertices),
            incoming_edges: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` label triples, creating
    /// vertices on first sight
    pub fn from_labeled_edges<'a, I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            let u = graph.add_vertex(from);
            let v = graph.add_vertex(to);
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }

    /// Adds a vertex with the given label and returns its id.
    /// If the label is already known the existing id is returned.
    pub fn add_vertex(&mut self, label: &str) -> VertexId {
        let id = self.labels.get_or_insert(label);
        if id == self.outgoing_edges.len() {
            self.outgoing_edges.push(BTreeMap::new());
            self.incoming_edges.push(BTreeSet::new());
        }
        id
    }

    /// Looks up the id of a labelled vertex
    pub fn vertex_id(&self, label: &str) -> Result<VertexId> {
        self.labels
            .id(label)
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }

    /// Returns the label of a vertex
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.labels.label(vertex)
    }

    /// Adds an edge between two labelled vertices
    pub fn add_edge_by_label(&mut self, from: &str, to: &str, weight: W) -> Result<()> {
        let u = self.vertex_id(from)?;
        let v = self.vertex_id(to)?;
        self.add_edge(u, v, weight)
    }

    /// Iterates over every edge, ordered by `(from, to)`
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.outgoing_edges
            .iter()
            .enumerate()
            .flat_map(|(u, targets)| targets.iter().map(move |(&v, &w)| Edge::new(u, v, w)))
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|(&v, &w)| (v, w))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        match self.incoming_edges.get(vertex) {
            Some(sources) => Box::new(
                sources
                    .iter()
                    .filter_map(move |&u| self.outgoing_edges[u].get(&vertex).map(|&w| (u, w))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.outgoing_edges.len()
    }

    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.outgoing_edges.get(from)?.get(&to).copied()
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Debug + Copy,
{
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        if from == to {
            return Err(Error::SelfLoop(from));
        }
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        // Overwrites keep the edge count unchanged
        if self.outgoing_edges[from].insert(to, weight).is_none() {
            self.incoming_edges[to].insert(from);
            self.edge_count += 1;
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<Edge<W>> {
        let weight = self.outgoing_edges.get_mut(from)?.remove(&to)?;
        self.incoming_edges[to].remove(&from);
        self.edge_count -= 1;
        Some(Edge::new(from, to, weight))
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Vec<Edge<W>> {
        if !self.has_vertex(vertex) {
            return Vec::new();
        }

        let outgoing = std::mem::take(&mut self.outgoing_edges[vertex]);
        let incoming = std::mem::take(&mut self.incoming_edges[vertex]);
        let mut removed = Vec::with_capacity(outgoing.len() + incoming.len());

        for (target, weight) in outgoing {
            self.incoming_edges[target].remove(&vertex);
            removed.push(Edge::new(vertex, target, weight));
        }
        for source in incoming {
            if let Some(weight) = self.outgoing_edges[source].remove(&vertex) {
                removed.push(Edge::new(source, vertex, weight));
            }
        }

        self.edge_count -= removed.len();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn diamond() -> DirectedGraph<OrderedFloat<f64>> {
        DirectedGraph::from_labeled_edges([
            ("A", "B", OrderedFloat(1.0)),
            ("A", "C", OrderedFloat(2.0)),
            ("B", "D", OrderedFloat(1.0)),
            ("C", "D", OrderedFloat(1.0)),
            ("B", "C", OrderedFloat(1.0)),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_edge_rejects_bad_references() {
        let mut g = diamond();
        assert_eq!(g.add_edge(0, 42, OrderedFloat(1.0)), Err(Error::InvalidEdge(0, 42)));
        assert_eq!(g.add_edge(1, 1, OrderedFloat(1.0)), Err(Error::SelfLoop(1)));
        assert!(matches!(
            g.add_edge(0, 3, OrderedFloat(-1.0)),
            Err(Error::NegativeWeight(_))
        ));
        assert!(matches!(
            g.add_edge(0, 3, OrderedFloat(f64::INFINITY)),
            Err(Error::NonFiniteWeight(_))
        ));
        assert!(matches!(
            g.add_edge(0, 3, OrderedFloat(f64::NAN)),
            Err(Error::NonFiniteWeight(_))
        ));
        assert_eq!(
            g.add_edge_by_label("A", "Z", OrderedFloat(1.0)),
            Err(Error::UnknownLabel("Z".to_string()))
        );
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn test_add_edge_overwrites_weight() {
        let mut g = diamond();
        g.add_edge_by_label("A", "B", OrderedFloat(7.0)).unwrap();
        assert_eq!(g.edge_count(), 5);
        assert_eq!(g.get_edge_weight(0, 1), Some(OrderedFloat(7.0)));
    }

    #[test]
    fn test_neighbor_queries() {
        let g = diamond();
        let (a, b, c, d) = (0, 1, 2, 3);
        assert_eq!(g.neighbors(a), vec![b, c]);
        assert_eq!(g.predecessors(d), vec![b, c]);
        assert_eq!(g.predecessors(a), Vec::<VertexId>::new());
        assert_eq!(g.get_edge_weight(d, a), None);
        assert_eq!(g.incoming_edges(c).collect::<Vec<_>>(), vec![(a, OrderedFloat(2.0)), (b, OrderedFloat(1.0))]);
    }

    #[test]
    fn test_remove_edge_returns_it_once() {
        let mut g = diamond();
        let removed = g.remove_edge(0, 1);
        assert_eq!(removed, Some(Edge::new(0, 1, OrderedFloat(1.0))));
        assert_eq!(g.remove_edge(0, 1), None);
        assert!(!g.has_edge(0, 1));
        assert!(!g.predecessors(1).contains(&0));
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_remove_vertex_keeps_vertex_and_restores() {
        let original = diamond();
        let mut g = original.clone();

        let removed = g.remove_vertex(1);
        assert_eq!(removed.len(), 3);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 2);
        assert!(g.neighbors(1).is_empty());
        assert!(g.predecessors(1).is_empty());

        g.add_edges(removed).unwrap();
        assert_eq!(g, original);
    }
}
