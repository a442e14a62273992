use std::fmt::Debug;
use log::warn;
use num_traits::{Float, Zero};

use crate::data_structures::KeyedMap;
use crate::graph::{Graph, VertexId};
use crate::Result;

/// Counters collected during one shortest path run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Vertices extracted from the queue and marked final
    pub settled: usize,

    /// Edges looked at while settling vertices
    pub edges_scanned: usize,

    /// Edges that lowered a tentative distance
    pub relaxations: usize,
}

/// Result of a shortest path algorithm execution
///
/// Unreached vertices keep an infinite distance and have no predecessor. The
/// result is a snapshot: mutating the graph afterwards does not update it.
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distances from source to each vertex
    pub distances: KeyedMap<VertexId, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: KeyedMap<VertexId, VertexId>,

    /// Source vertex ID
    pub source: VertexId,

    /// Counters for the run that produced this result
    pub stats: RunStats,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Shortest distance to `target`, or infinity if it was not reached
    pub fn shortest_distance(&self, target: VertexId) -> W {
        self.distances.get(&target).copied().unwrap_or_else(W::infinity)
    }

    /// Returns true if `target` has a finite distance
    pub fn is_reachable(&self, target: VertexId) -> bool {
        self.shortest_distance(target) < W::infinity()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|(_, distance)| **distance < W::infinity())
            .count()
    }

    /// The predecessor of `target` on its shortest path
    pub fn predecessor(&self, target: VertexId) -> Option<VertexId> {
        self.predecessors.get(&target).copied()
    }

    /// Shortest path from the source to `target`, both ends included
    ///
    /// Empty when `target` was not reached.
    pub fn shortest_path(&self, target: VertexId) -> Vec<VertexId> {
        if !self.is_reachable(target) {
            return Vec::new();
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            // A chain longer than the vertex count can only be a cycle
            if path.len() > self.distances.len() {
                warn!("cycle in predecessor chain while rebuilding path to {}", target);
                return Vec::new();
            }
            path.push(previous);
            current = previous;
        }

        if current != self.source {
            warn!("predecessor chain for {} ends at {} instead of the source", target, current);
            return Vec::new();
        }

        path.reverse();
        path
    }

    /// Shortest path to `target` expressed as the graph's values
    pub fn path_values<'g, G>(&self, graph: &'g G, target: VertexId) -> Vec<&'g G::Value>
    where
        G: Graph<W>,
        G::Value: 'g,
    {
        self.shortest_path(target)
            .into_iter()
            .filter_map(|vertex| graph.value_of(vertex))
            .collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from the vertex holding `source` to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &G::Value) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
