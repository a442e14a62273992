//! SSSP Engine - value-keyed graphs and Dijkstra shortest paths
//!
//! Graphs are built from arbitrary hashable values; equal values always map to
//! the same vertex. Shortest paths are computed with Dijkstra's algorithm over a
//! binary heap that supports decrease-key, and the result answers distance and
//! path queries without further errors: unreached vertices report an infinite
//! distance and an empty path.
//!
//! Edge weights are assumed to be non-negative. They are not validated; with
//! negative weights the reported distances are only upper bounds.
//!
//! ```
//! use sssp_engine::{dijkstra, KeyedGraph};
//!
//! let mut graph: KeyedGraph<&str, f64> = KeyedGraph::undirected();
//! graph.add_edge("A", "B", 1.0);
//! graph.add_edge("B", "C", 2.0);
//!
//! let result = dijkstra(&graph, &"A").unwrap();
//! let c = graph.get_vertex("C").unwrap();
//! assert_eq!(result.shortest_distance(c), 3.0);
//! assert_eq!(result.path_values(&graph, c), vec![&"A", &"B", &"C"]);
//! ```

pub mod algorithm;
pub mod benchmark;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;

pub use algorithm::{
    dijkstra, Dijkstra, DijkstraResult, RunStats, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{Direction, KeyedGraph, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("start vertex not found: {0}")]
    StartVertexNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
