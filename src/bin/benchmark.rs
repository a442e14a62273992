use clap::Parser;
use sssp_engine::benchmark::{run_benchmark, BenchmarkConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = BenchmarkConfig::parse();
    config.validate()?;

    if !config.json {
        println!("=====================================================");
        println!("Benchmark: Dijkstra with decrease-key heap");
        println!("Edge factor: {} edges per vertex (on average)", config.edge_factor);
        println!(
            "Graphs: {}, seed {}, {} iteration(s) per size",
            if config.undirected { "undirected" } else { "directed" },
            config.seed,
            config.iterations
        );
        println!("=====================================================");
    }

    let report = run_benchmark(&config)?;

    if config.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.to_table());
    }

    Ok(())
}
