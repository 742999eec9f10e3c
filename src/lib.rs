//! Yen KSP - K shortest loopless paths in weighted directed graphs
//!
//! This library implements Yen's algorithm ("Finding the K Shortest Loopless Paths
//! in a Network", 1971) on top of a label-setting Dijkstra search.
//!
//! The graph supports reversible edge and vertex removal: Yen's algorithm removes
//! edges around every spur node, searches the reduced graph, and restores exactly
//! what it removed before the next spur position is processed.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod path;

pub use algorithm::{
    dijkstra::Dijkstra, parallel_yen::ParallelYen, yen::Yen, KShortestPaths,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{Edge, VertexId};
pub use path::Path;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(VertexId),

    #[error("Unknown vertex label: {0}")]
    UnknownLabel(String),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(VertexId, VertexId),

    #[error("Self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight must be finite: {0}")]
    NonFiniteWeight(f64),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
