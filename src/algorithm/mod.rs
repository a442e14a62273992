pub mod dijkstra;
pub mod traits;

pub use dijkstra::{dijkstra, Dijkstra, DijkstraResult};
pub use traits::{RunStats, ShortestPathAlgorithm, ShortestPathResult};
