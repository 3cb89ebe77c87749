pub mod bmssp;
pub mod dijkstra;
pub mod find_pivots;
pub mod params;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
