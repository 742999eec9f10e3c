pub mod traits;
pub mod directed;
pub mod edge;
pub mod labels;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use directed::DirectedGraph;
pub use edge::Edge;
pub use labels::LabelMap;

/// Dense vertex identifier handed out by the graph
pub type VertexId = usize;
