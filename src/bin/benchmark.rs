use std::time::{Duration, Instant};
use mlc_sssp::graph::generators::generate_random;
use mlc_sssp::graph::{Graph, Network};
use mlc_sssp::{AllPairs, AllPairsShortestPaths, ApspConfig, Discipline, Method};

// Function to benchmark a discipline on a graph
fn benchmark_discipline(discipline: Discipline, graph: &Network<f64>) -> Result<Duration, mlc_sssp::Error> {
    println!("Running {} on graph with {} nodes...", discipline, graph.node_count());

    let config = ApspConfig::new(Method::Deque).with_discipline(discipline);
    let start = Instant::now();
    let result: AllPairs<f64> = AllPairsShortestPaths::new(config).run(graph)?;
    let duration = start.elapsed();

    println!(
        "  - {} scans, {} relaxations in {:?}",
        result.stats().scans,
        result.stats().relaxations,
        duration
    );

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The O(n) disciplines get slow fast, keep the sizes modest
    let graph_sizes = vec![100, 250, 500, 1_000];

    // Edge factor: average number of links per node
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: all-pairs shortest paths per discipline");
    println!("Edge factor: {} links per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random(size, edge_factor, 100, 0x5EED ^ size as u64)?;
        println!("Graph has {} nodes and {} links", graph.node_count(), graph.link_count());

        let mut timings = Vec::with_capacity(Discipline::ALL.len());
        for discipline in Discipline::ALL {
            timings.push(benchmark_discipline(discipline, &graph)?);
        }
        results.push((size, timings));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results (ms)");
    println!("=====================================================");
    print!("{:<10}", "Nodes");
    for discipline in Discipline::ALL {
        print!(" | {:>14}", discipline.name());
    }
    println!();
    println!("-----------------------------------------------------");

    for (size, timings) in &results {
        print!("{:<10}", size);
        for duration in timings {
            print!(" | {:>14}", duration.as_millis());
        }
        println!();
    }

    Ok(())
}
