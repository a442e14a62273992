use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{RunStats, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{IndexedPriorityQueue, KeyedMap, KeyedSet};
use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Result of a Dijkstra run
pub type DijkstraResult<W> = ShortestPathResult<W>;

/// Classic Dijkstra's algorithm over a decrease-key priority queue
///
/// Every vertex is queued up front; relaxations lower queued priorities in
/// place instead of pushing duplicates. Distances are only correct for
/// non-negative weights, which are assumed and not checked.
#[derive(Debug, Default)]
pub struct Dijkstra {
    /// Whether to fill in [`RunStats`] on the result
    collect_stats: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Enable or disable collection of run statistics
    pub fn with_stats_collection(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    G::Value: Debug,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: &G::Value,
    ) -> Result<ShortestPathResult<W>> {
        let source = graph
            .lookup(source)
            .ok_or_else(|| Error::StartVertexNotFound(format!("{:?}", source)))?;

        let n = graph.vertex_count();
        debug!("dijkstra: {} vertices, source {}", n, source);

        let mut distances: KeyedMap<VertexId, W> = KeyedMap::with_capacity(n);
        let mut predecessors: KeyedMap<VertexId, VertexId> = KeyedMap::with_capacity(n);
        let mut visited: KeyedSet<VertexId> = KeyedSet::with_capacity(n);
        let mut queue = IndexedPriorityQueue::with_capacity(n);
        let mut stats = RunStats::default();

        for v in graph.vertex_ids() {
            let initial = if v == source { W::zero() } else { W::infinity() };
            distances.insert(v, initial);
            queue.offer(v, initial);
        }

        while let Some((u, dist_u)) = queue.poll() {
            if !visited.insert(u) {
                continue;
            }
            stats.settled += 1;

            for (w, weight) in graph.outgoing_edges(u) {
                stats.edges_scanned += 1;
                if visited.contains(&w) {
                    continue;
                }

                let candidate = dist_u + weight;
                let current = distances.get(&w).copied().unwrap_or_else(W::infinity);
                if candidate < current {
                    trace!("relax {} -> {}: {:?} -> {:?}", u, w, current, candidate);
                    distances.insert(w, candidate);
                    predecessors.insert(w, u);
                    queue.change_priority(w, candidate);
                    stats.relaxations += 1;
                }
            }
        }

        debug!(
            "dijkstra: settled {} vertices, {} relaxations over {} edges",
            stats.settled, stats.relaxations, stats.edges_scanned
        );

        if !self.collect_stats {
            stats = RunStats::default();
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}

/// Runs Dijkstra from the vertex holding `start`
///
/// Fails with [`Error::StartVertexNotFound`] if no vertex holds `start`.
pub fn dijkstra<W, G>(graph: &G, start: &G::Value) -> Result<DijkstraResult<W>>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    G::Value: Debug,
{
    Dijkstra::new().compute_shortest_paths(graph, start)
}
