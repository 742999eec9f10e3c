pub mod traits;
pub mod dijkstra;
pub mod yen;
pub mod parallel_yen;

pub use traits::{KShortestPaths, ShortestPathAlgorithm, ShortestPathResult};
