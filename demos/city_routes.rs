use colored::*;
use sssp_engine::{dijkstra, KeyedGraph};

/// Road distances in km between European cities
const ROADS: &[(&str, &str, f64)] = &[
    ("Prague", "Bratislava", 328.0),
    ("Prague", "Nuremberg", 297.0),
    ("Prague", "Vienna", 293.0),
    ("Bratislava", "Vienna", 79.0),
    ("Nuremberg", "Munich", 170.0),
    ("Vienna", "Munich", 402.0),
    ("Vienna", "Florence", 863.0),
    ("Munich", "Florence", 646.0),
    ("Florence", "Rome", 278.0),
];

fn main() {
    env_logger::init();

    let mut graph: KeyedGraph<&str, f64> = KeyedGraph::undirected();
    for &(from, to, km) in ROADS {
        graph.add_edge(from, to, km);
    }
    graph.add_vertex("Reykjavik");

    let start = "Prague";
    println!("{}", format!("Shortest routes from {}", start).bright_cyan().bold());

    let result = match dijkstra(&graph, &start) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            return;
        }
    };

    for vertex in graph.all_vertices() {
        let name = graph.value(vertex).copied().unwrap_or("?");
        let path = result.path_values(&graph, vertex);

        if path.is_empty() {
            println!("  {:<11} {}", name.bold(), "unreachable".bright_red());
            continue;
        }

        let route = path.iter().map(|city| city.to_string()).collect::<Vec<_>>().join(" -> ");
        println!(
            "  {:<11} {:>7} km  {}",
            name.bold(),
            result.shortest_distance(vertex).to_string().bright_green(),
            route.bright_yellow()
        );
    }

    // Asking for a city that is not on the map is the only failure mode
    if let Err(err) = dijkstra(&graph, &"Atlantis") {
        println!("\n{} {}", "expected failure:".bright_magenta(), err);
    }
}
