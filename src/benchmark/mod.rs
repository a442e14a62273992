//! Timing harness that runs Dijkstra over generated graphs

pub mod config;

pub use config::BenchmarkConfig;

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{Dijkstra, RunStats, ShortestPathAlgorithm};
use crate::graph::generators::random_graph;
use crate::graph::{Graph, KeyedGraph};
use crate::Result;

/// Timings for one graph size
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub node_count: usize,
    pub edge_count: usize,
    pub reachable: usize,
    /// Mean wall time over all iterations
    pub execution_time_ms: f64,
    pub fastest_ms: f64,
    pub settled: usize,
    pub relaxations: usize,
    pub edges_scanned: usize,
}

/// Full benchmark report
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub benchmark_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub algorithm: String,
    pub directed: bool,
    pub edge_factor: f64,
    pub seed: u64,
    pub iterations: usize,
    pub results: Vec<BenchmarkResult>,
}

impl BenchmarkReport {
    /// Serializes the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Renders the report as a fixed-width text table
    pub fn to_table(&self) -> String {
        let mut table = format!(
            "{:<10} | {:<10} | {:<10} | {:<12} | {:<12} | {:<12}\n",
            "Vertices", "Edges", "Reachable", "Mean (ms)", "Best (ms)", "Relaxations"
        );
        table.push_str(&"-".repeat(80));
        table.push('\n');

        for result in &self.results {
            table.push_str(&format!(
                "{:<10} | {:<10} | {:<10} | {:<12.3} | {:<12.3} | {:<12}\n",
                result.node_count,
                result.edge_count,
                result.reachable,
                result.execution_time_ms,
                result.fastest_ms,
                result.relaxations
            ));
        }
        table
    }
}

/// Runs the benchmark described by `config`, always from vertex `0`
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    config.validate()?;

    let dijkstra = Dijkstra::new().with_stats_collection(true);
    let mut results = Vec::with_capacity(config.sizes.len());

    for &size in &config.sizes {
        info!("generating graph with {} vertices", size);
        let graph = random_graph(size, config.edge_factor, config.direction(), config.seed);

        let mut total_ms = 0.0;
        let mut fastest_ms = f64::INFINITY;
        let mut reachable = 0;
        let mut stats = RunStats::default();

        for _ in 0..config.iterations {
            let start = Instant::now();
            let result = dijkstra.compute_shortest_paths(&graph, &0)?;
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

            total_ms += elapsed_ms;
            fastest_ms = fastest_ms.min(elapsed_ms);
            reachable = result.reachable_count();
            stats = result.stats;
        }

        let mean_ms = total_ms / config.iterations as f64;
        info!("{} vertices: {} reachable in {:.3} ms", size, reachable, mean_ms);

        results.push(BenchmarkResult {
            node_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            reachable,
            execution_time_ms: mean_ms,
            fastest_ms,
            settled: stats.settled,
            relaxations: stats.relaxations,
            edges_scanned: stats.edges_scanned,
        });
    }

    Ok(BenchmarkReport {
        benchmark_id: Uuid::new_v4(),
        created_at: Utc::now(),
        algorithm: ShortestPathAlgorithm::<f64, KeyedGraph<usize, f64>>::name(&dijkstra)
            .to_string(),
        directed: !config.undirected,
        edge_factor: config.edge_factor,
        seed: config.seed,
        iterations: config.iterations,
        results,
    })
}
