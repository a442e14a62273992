use std::ffi::OsString;
use std::iter;

use clap::Parser;

use crate::graph::Direction;
use crate::{Error, Result};

/// Configuration for a benchmark run
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "benchmark")]
#[command(about = "Times Dijkstra over seeded random graphs", long_about = None)]
pub struct BenchmarkConfig {
    /// Vertex counts to generate graphs for
    #[arg(long, value_delimiter = ',', default_values_t = [1_000, 10_000, 50_000])]
    pub sizes: Vec<usize>,

    /// Average number of edges per vertex
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub edge_factor: f64,

    /// Generate undirected graphs
    #[arg(long)]
    pub undirected: bool,

    /// Seed for graph generation
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Runs per graph size; timings are averaged
    #[arg(long, default_value_t = 3)]
    pub iterations: usize,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 10_000, 50_000],
            edge_factor: 2.0,
            undirected: false,
            seed: 42,
            iterations: 3,
            json: false,
        }
    }
}

impl BenchmarkConfig {
    /// Builds a validated configuration from command line arguments, program name excluded
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv = iter::once(OsString::from("benchmark")).chain(args.into_iter().map(Into::into));
        let config =
            Self::try_parse_from(argv).map_err(|err| Error::InvalidConfig(err.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Graph direction selected by `--undirected`
    pub fn direction(&self) -> Direction {
        if self.undirected {
            Direction::Undirected
        } else {
            Direction::Directed
        }
    }

    /// Rejects configurations that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() || self.sizes.contains(&0) {
            return Err(Error::InvalidConfig("sizes must be non-empty and positive".to_string()));
        }
        if !(self.edge_factor >= 0.0 && self.edge_factor.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "edge factor must be a non-negative number, got {}",
                self.edge_factor
            )));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig("iterations must be at least 1".to_string()));
        }
        Ok(())
    }
}
