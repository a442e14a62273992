use crate::graph::{Direction, KeyedGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random graph over the values `0..n` with about `edge_factor * n` edges
///
/// Weights are drawn uniformly from `[1, 100)`. The same seed always yields the
/// same graph. Self-loops are skipped.
pub fn random_graph(
    n: usize,
    edge_factor: f64,
    direction: Direction,
    seed: u64,
) -> KeyedGraph<usize, f64> {
    let mut graph = KeyedGraph::with_capacity(direction, n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }

    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1.0..100.0));
        }
    }

    graph
}

/// Generates an undirected 4-connected grid with unit weights
///
/// Vertex values are `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> KeyedGraph<usize, f64> {
    let mut graph = KeyedGraph::with_capacity(Direction::Undirected, width * height);

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            graph.add_vertex(current);

            if x + 1 < width {
                graph.add_edge(current, current + 1, 1.0);
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, 1.0);
            }
        }
    }

    graph
}
