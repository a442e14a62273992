use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::vertex::VertexId;

/// Trait representing a weighted graph whose vertices are identified by value
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// The caller-supplied value each vertex stands for
    type Value;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns every vertex identity in insertion order
    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W>;

    /// Resolves a value to its vertex identity
    fn lookup(&self, value: &Self::Value) -> Option<VertexId>;

    /// Returns the value a vertex stands for
    fn value_of(&self, vertex: VertexId) -> Option<&Self::Value>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the vertex for `value`, creating it on first use
    fn add_vertex(&mut self, value: Self::Value) -> VertexId;

    /// Adds or overwrites the edge between two values, creating missing vertices
    fn add_edge(&mut self, from: Self::Value, to: Self::Value, weight: W);

    /// Removes the edge between two values; returns false if there was none
    fn remove_edge(&mut self, from: &Self::Value, to: &Self::Value) -> bool;
}
