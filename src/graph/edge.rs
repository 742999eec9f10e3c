use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::graph::VertexId;

/// A weighted directed edge. This is the unit of removal and restoration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

impl<W: Copy> Edge<W> {
    pub fn new(from: VertexId, to: VertexId, weight: W) -> Self {
        Edge { from, to, weight }
    }

    /// Returns the `(from, to)` pair, ignoring the weight
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }
}
