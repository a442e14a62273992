use std::fmt;

use crate::data_structures::Key;

/// Identity of a vertex: its slot in the owning graph's vertex arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(index: usize) -> Self {
        VertexId(index)
    }

    /// Returns the arena index of this vertex
    pub fn index(self) -> usize {
        self.0
    }
}

impl Key for VertexId {
    fn index(&self) -> usize {
        self.0
    }

    fn from_index(index: usize) -> Self {
        VertexId(index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex: the caller's value plus its outgoing adjacency
///
/// The adjacency holds at most one weight per neighbor and keeps neighbors in
/// the order they were first connected.
#[derive(Debug, Clone)]
pub struct Vertex<T, W> {
    value: T,
    adjacency: Vec<(VertexId, W)>,
}

impl<T, W> Vertex<T, W>
where
    W: Copy,
{
    pub fn new(value: T) -> Self {
        Vertex {
            value,
            adjacency: Vec::new(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Iterates over `(neighbor, weight)` pairs
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.adjacency.iter().copied()
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Weight of the edge to `neighbor`, if connected
    pub fn weight_to(&self, neighbor: VertexId) -> Option<W> {
        self.adjacency
            .iter()
            .find(|(target, _)| *target == neighbor)
            .map(|(_, weight)| *weight)
    }

    /// Records the weight to `neighbor`, overwriting any previous weight
    pub fn set_weight(&mut self, neighbor: VertexId, weight: W) {
        for edge in self.adjacency.iter_mut() {
            if edge.0 == neighbor {
                edge.1 = weight;
                return;
            }
        }
        self.adjacency.push((neighbor, weight));
    }

    /// Drops the edge to `neighbor`, returning true if there was one
    pub fn remove_neighbor(&mut self, neighbor: VertexId) -> bool {
        let len_before = self.adjacency.len();
        self.adjacency.retain(|(target, _)| *target != neighbor);
        len_before > self.adjacency.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut vertex: Vertex<&str, f64> = Vertex::new("a");
        vertex.set_weight(VertexId::new(1), 4.0);
        vertex.set_weight(VertexId::new(2), 2.0);
        vertex.set_weight(VertexId::new(1), 7.5);

        assert_eq!(vertex.degree(), 2);
        assert_eq!(vertex.weight_to(VertexId::new(1)), Some(7.5));
        assert_eq!(
            vertex.neighbors().map(|(id, _)| id.index()).collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_remove_neighbor() {
        let mut vertex: Vertex<u8, f32> = Vertex::new(0);
        vertex.set_weight(VertexId::new(0), 1.0);

        assert!(vertex.remove_neighbor(VertexId::new(0)));
        assert!(!vertex.remove_neighbor(VertexId::new(0)));
        assert_eq!(vertex.weight_to(VertexId::new(0)), None);
    }
}
