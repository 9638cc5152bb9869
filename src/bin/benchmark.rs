use std::time::{Duration, Instant};

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use route_planner::algorithm::ShortestPathAlgorithm;
use route_planner::graph::generators::random_graph;
use route_planner::graph::{DirectedGraph, Graph};
use route_planner::Dijkstra;

/// Times Dijkstra on random graphs of increasing size.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph sizes (vertex counts) to test
    #[arg(short, long, value_delimiter = ',', default_values_t = vec![1_000, 10_000, 50_000, 100_000])]
    sizes: Vec<usize>,

    /// Average number of edges per vertex
    #[arg(short, long, default_value_t = 2.0)]
    edge_factor: f64,

    /// Seed for the graph generator
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &DirectedGraph<String, f64>, source: &String) -> (Duration, usize)
where
    A: ShortestPathAlgorithm<String, f64, DirectedGraph<String, f64>>,
{
    println!("Running {} on graph with {} vertices...", algorithm.name(), graph.node_count());

    let start = Instant::now();
    let result = algorithm.compute_shortest_paths(graph, source);
    let duration = start.elapsed();

    let reachable = result.reachable_count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    (duration, reachable)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    println!("=====================================================");
    println!("Benchmark: Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", args.edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let mut results = Vec::new();

    for &size in &args.sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = random_graph(size, args.edge_factor, &mut rng);
        let source = "0".to_string();

        println!("Graph has {} vertices and {} edges", graph.node_count(), graph.edge_count());

        let (duration, reachable) = benchmark_algorithm(&dijkstra, &graph, &source);
        results.push((size, graph.edge_count(), reachable, duration));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<10} | {:<12}", "Vertices", "Edges", "Reachable", "Time (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, reachable, duration) in &results {
        println!(
            "{:<10} | {:<10} | {:<10} | {:<12.2}",
            size,
            edges,
            reachable,
            duration.as_secs_f64() * 1000.0
        );
    }
}
