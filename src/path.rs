use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use crate::graph::{Edge, VertexId};
use crate::{Error, Result};

/// An ordered walk of edges from a source vertex, with its total cost.
///
/// Two paths are equal when they start at the same vertex and traverse the
/// same edges in the same order; weights do not take part in equality.
///
/// Deserialization goes through the same checks as [`Path::from_edges`] and
/// recomputes the cost from the edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "RawPath<W>",
    bound(deserialize = "W: Float + Debug + Copy + Deserialize<'de>")
)]
pub struct Path<W> {
    source: VertexId,
    edges: Vec<Edge<W>>,
    total_cost: W,
}

/// Serialized shape of a [`Path`]. A stored `total_cost` is ignored.
#[derive(Deserialize)]
struct RawPath<W> {
    source: VertexId,
    edges: Vec<Edge<W>>,
}

impl<W> TryFrom<RawPath<W>> for Path<W>
where
    W: Float + Debug + Copy,
{
    type Error = Error;

    fn try_from(raw: RawPath<W>) -> Result<Self> {
        for edge in &raw.edges {
            if !edge.weight.is_finite() {
                return Err(Error::NonFiniteWeight(edge.weight.to_f64().unwrap_or(f64::NAN)));
            }
            if edge.weight < W::zero() {
                return Err(Error::NegativeWeight(edge.weight.to_f64().unwrap_or(f64::NAN)));
            }
        }
        match raw.edges.first() {
            None => return Ok(Path::new(raw.source)),
            Some(first) if first.from != raw.source => {
                return Err(Error::InvalidPath(format!(
                    "first edge leaves {} but the path starts at {}",
                    first.from, raw.source
                )));
            }
            Some(_) => {}
        }
        Path::from_edges(raw.edges)
            .ok_or_else(|| Error::InvalidPath("edges do not form a contiguous walk".to_string()))
    }
}

impl<W> Path<W>
where
    W: Float + Debug + Copy,
{
    /// Creates an empty path sitting at `source`
    pub fn new(source: VertexId) -> Self {
        Path {
            source,
            edges: Vec::new(),
            total_cost: W::zero(),
        }
    }

    /// Creates a path from a non-empty contiguous edge list
    pub fn from_edges(edges: Vec<Edge<W>>) -> Option<Self> {
        let source = edges.first()?.from;
        if edges.windows(2).any(|pair| pair[0].to != pair[1].from) {
            return None;
        }
        let total_cost = edges.iter().fold(W::zero(), |acc, e| acc + e.weight);
        Some(Path {
            source,
            edges,
            total_cost,
        })
    }

    /// Number of edges
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Sum of the edge weights. For a path built with [`Path::add_path`] this
    /// is the prefix cost plus the suffix cost, which for float weights may
    /// differ in the last bits from a left-to-right sum over the edges.
    pub fn total_cost(&self) -> W {
        self.total_cost
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.edges.last().map_or(self.source, |e| e.to)
    }

    /// The visited vertices, source first
    pub fn vertices(&self) -> Vec<VertexId> {
        std::iter::once(self.source)
            .chain(self.edges.iter().map(|e| e.to))
            .collect()
    }

    /// Returns a new path made of the first `i` edges, with its cost recomputed
    pub fn clone_to(&self, i: usize) -> Path<W> {
        let end = i.min(self.edges.len());
        let edges = self.edges[..end].to_vec();
        let total_cost = edges.iter().fold(W::zero(), |acc, e| acc + e.weight);
        Path {
            source: self.source,
            edges,
            total_cost,
        }
    }

    /// Appends `suffix` to this path. The suffix is expected to start where
    /// this path ends.
    pub fn add_path(&mut self, suffix: &Path<W>) {
        debug_assert_eq!(self.target(), suffix.source, "suffix must start at the path's end");
        self.edges.extend_from_slice(&suffix.edges);
        self.total_cost = self.total_cost + suffix.total_cost;
    }

    /// True when the first `len` edges of both paths have the same endpoints
    pub fn shares_prefix(&self, other: &Path<W>, len: usize) -> bool {
        if self.source != other.source || self.edges.len() < len || other.edges.len() < len {
            return false;
        }
        self.edges[..len]
            .iter()
            .zip(&other.edges[..len])
            .all(|(a, b)| a.endpoints() == b.endpoints())
    }

    /// True when no vertex is visited twice
    pub fn is_loopless(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.edges.len() + 1);
        self.vertices().into_iter().all(|v| seen.insert(v))
    }

    /// True when consecutive edges connect and the first one leaves the source
    pub fn is_contiguous(&self) -> bool {
        self.edges.first().map_or(true, |e| e.from == self.source)
            && self.edges.windows(2).all(|pair| pair[0].to == pair[1].from)
    }
}

impl<W> PartialEq for Path<W> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.edges.len() == other.edges.len()
            && self
                .edges
                .iter()
                .zip(&other.edges)
                .all(|(a, b)| a.from == b.from && a.to == b.to)
    }
}

impl<W> Eq for Path<W> {}

impl<W> Hash for Path<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        for edge in &self.edges {
            edge.to.hash(state);
        }
    }
}
