use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::vertex::{Vertex, VertexId};
use log::trace;
use num_traits::{Float, Zero};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Whether edges are one-way or mirrored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Directed,
    Undirected,
}

impl Direction {
    pub fn is_directed(self) -> bool {
        self == Direction::Directed
    }
}

/// Edge mutation applied by [`KeyedGraph::mutate_edge`]
#[derive(Debug, Clone, Copy)]
enum EdgeChange<W> {
    Set(W),
    Remove,
}

/// A weighted graph whose vertices are identified by caller values
///
/// Vertices live in an arena and are addressed by [`VertexId`]; a side map
/// resolves values to ids, so equal values always land on the same vertex.
#[derive(Debug, Clone)]
pub struct KeyedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Fixed at construction
    direction: Direction,

    /// Vertex arena, in order of first appearance
    vertices: Vec<Vertex<T, W>>,

    /// value -> arena index
    index: HashMap<T, VertexId>,
}

impl<T, W> KeyedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph with the given edge direction
    pub fn new(direction: Direction) -> Self {
        KeyedGraph {
            direction,
            vertices: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(Direction::Directed)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(Direction::Undirected)
    }

    /// Creates an empty graph with room for `vertices` vertices
    pub fn with_capacity(direction: Direction, vertices: usize) -> Self {
        KeyedGraph {
            direction,
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the vertex for `value`, creating it if this is the first time
    /// the value is seen
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        if let Some(&id) = self.index.get(&value) {
            return id;
        }

        let id = VertexId::new(self.vertices.len());
        self.index.insert(value.clone(), id);
        self.vertices.push(Vertex::new(value));
        id
    }

    /// Connects `from` to `to` with `weight`, creating missing vertices
    ///
    /// A repeated edge overwrites the previous weight. Undirected graphs also
    /// record the reverse edge. Weights are not validated.
    pub fn add_edge(&mut self, from: T, to: T, weight: W) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.mutate_edge(from, to, EdgeChange::Set(weight), !self.direction.is_directed());
    }

    /// Removes the edge between two values (both directions when undirected)
    ///
    /// Unknown values or missing edges are a no-op returning false.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.get_vertex(from), self.get_vertex(to)) {
            (Some(from), Some(to)) => {
                self.mutate_edge(from, to, EdgeChange::Remove, !self.direction.is_directed())
            }
            _ => false,
        }
    }

    /// Returns the vertex for `value` if it was ever added
    pub fn get_vertex<Q>(&self, value: &Q) -> Option<VertexId>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).copied()
    }

    /// Iterates over every vertex in order of first appearance
    pub fn all_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T, W>> {
        self.vertices.get(id.index())
    }

    /// Returns the value a vertex stands for
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::value)
    }

    /// Iterates over the outgoing `(neighbor, weight)` pairs of a vertex
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, W)> + '_ {
        self.vertex(id).into_iter().flat_map(Vertex::neighbors)
    }

    /// Applies one edge change, and its mirror image when `mirror` is set
    fn mutate_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        change: EdgeChange<W>,
        mirror: bool,
    ) -> bool {
        trace!("edge {:?} {} -> {} (mirror: {})", change, from, to, mirror);

        let changed = self.apply_edge_change(from, to, change);
        if mirror && from != to {
            self.apply_edge_change(to, from, change);
        }
        changed
    }

    fn apply_edge_change(&mut self, from: VertexId, to: VertexId, change: EdgeChange<W>) -> bool {
        let vertex = match self.vertices.get_mut(from.index()) {
            Some(vertex) => vertex,
            None => return false,
        };

        match change {
            EdgeChange::Set(weight) => {
                vertex.set_weight(to, weight);
                true
            }
            EdgeChange::Remove => vertex.remove_neighbor(to),
        }
    }
}

impl<T, W> Default for KeyedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::directed()
    }
}

impl<T, W> Graph<W> for KeyedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    type Value = T;

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        match self.direction {
            Direction::Directed => self.vertices.iter().map(Vertex::degree).sum(),
            // Each undirected edge is stored twice, self-loops once
            Direction::Undirected => self
                .vertices
                .iter()
                .enumerate()
                .map(|(from, vertex)| {
                    vertex
                        .neighbors()
                        .filter(|(to, _)| from <= to.index())
                        .count()
                })
                .sum(),
        }
    }

    fn vertex_ids(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.all_vertices())
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_> {
        Box::new(self.neighbors(vertex))
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertices.len()
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.vertex(from).and_then(|vertex| vertex.weight_to(to))
    }

    fn lookup(&self, value: &T) -> Option<VertexId> {
        self.get_vertex(value)
    }

    fn value_of(&self, vertex: VertexId) -> Option<&T> {
        self.value(vertex)
    }
}

impl<T, W> MutableGraph<W> for KeyedGraph<T, W>
where
    T: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, value: T) -> VertexId {
        KeyedGraph::add_vertex(self, value)
    }

    fn add_edge(&mut self, from: T, to: T, weight: W) {
        KeyedGraph::add_edge(self, from, to, weight)
    }

    fn remove_edge(&mut self, from: &T, to: &T) -> bool {
        KeyedGraph::remove_edge(self, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph: KeyedGraph<String, f64> = KeyedGraph::directed();
        let a = graph.add_vertex("a".to_string());
        let b = graph.add_vertex("b".to_string());

        assert_eq!(graph.add_vertex("a".to_string()), a);
        assert_ne!(a, b);
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.get_vertex("b"), Some(b));
        assert_eq!(graph.get_vertex("z"), None);
    }

    #[test]
    fn test_undirected_edges_are_mirrored_and_counted_once() {
        let mut graph: KeyedGraph<&str, f64> = KeyedGraph::undirected();
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("b", "c", 2.0);
        graph.add_edge("c", "c", 3.0);

        let a = graph.get_vertex("a").unwrap();
        let b = graph.get_vertex("b").unwrap();
        assert_eq!(graph.get_edge_weight(b, a), Some(1.0));
        assert_eq!(graph.edge_count(), 3);

        graph.add_edge("b", "a", 9.0);
        assert_eq!(graph.get_edge_weight(a, b), Some(9.0));

        assert!(graph.remove_edge(&"a", &"b"));
        assert!(!graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_directed_remove_leaves_reverse_edge() {
        let mut graph: KeyedGraph<u32, f32> = KeyedGraph::directed();
        graph.add_edge(1, 2, 1.0);
        graph.add_edge(2, 1, 1.0);

        assert!(graph.remove_edge(&1, &2));
        assert!(!graph.remove_edge(&1, &2));
        assert!(!graph.remove_edge(&7, &8));

        let one = graph.get_vertex(&1).unwrap();
        let two = graph.get_vertex(&2).unwrap();
        assert!(graph.has_edge(two, one));
        assert_eq!(graph.edge_count(), 1);
    }
}
