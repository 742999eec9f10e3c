use std::env;
use std::time::{Duration, Instant};

use log::info;
use serde::Serialize;
use yen_ksp::graph::generators::generate_random_graph;
use yen_ksp::graph::{DirectedGraph, Graph};
use yen_ksp::{KShortestPaths, ParallelYen, Path, Yen};
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

/// One row of the benchmark summary
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    k: usize,
    paths_found: usize,
    sequential_ms: f64,
    parallel_ms: f64,
    costs: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    paths: Vec<Path<W>>,
}

// Function to benchmark a KSP algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &mut DirectedGraph<W>, k: usize) -> (Vec<Path<W>>, Duration)
where
    A: KShortestPaths<W, DirectedGraph<W>>,
{
    let source = 0;
    let target = graph.vertex_count() - 1;

    let start = Instant::now();
    let paths = match algorithm.ksp(graph, source, target, k) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("{} failed: {}", algorithm.name(), e);
            Vec::new()
        }
    };
    let duration = start.elapsed();
    info!("{}: {} paths in {:?}", algorithm.name(), paths.len(), duration);

    (paths, duration)
}

fn main() {
    env_logger::init();

    // Positional arguments: [vertices] [edge_factor] [k], plus --json
    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    let graph_sizes: Vec<usize> = match positional.first().and_then(|s| s.parse().ok()) {
        Some(n) => vec![n],
        None => vec![100, 1_000, 5_000],
    };
    let edge_factor: f64 = positional.get(1).and_then(|s| s.parse().ok()).unwrap_or(4.0);
    let k: usize = positional.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);

    let yen = Yen::new();
    let parallel_yen = ParallelYen::new();
    let mut rows = Vec::new();

    for &size in &graph_sizes {
        if size < 2 {
            eprintln!("skipping graph with {} vertices", size);
            continue;
        }
        let mut graph = generate_random_graph(size, edge_factor, 42);
        info!("graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (paths, sequential) = benchmark_algorithm(&yen, &mut graph, k);
        let (_, parallel) = benchmark_algorithm(&parallel_yen, &mut graph, k);

        rows.push(BenchmarkRow {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            k,
            paths_found: paths.len(),
            sequential_ms: sequential.as_secs_f64() * 1000.0,
            parallel_ms: parallel.as_secs_f64() * 1000.0,
            costs: paths.iter().map(|p| p.total_cost().into_inner()).collect(),
            paths,
        });
    }

    if json {
        match serde_json::to_string_pretty(&rows) {
            Ok(out) => println!("{}", out),
            Err(e) => eprintln!("failed to serialize results: {}", e),
        }
        return;
    }

    println!("=====================================================");
    println!("Benchmark: Yen vs ParallelYen (k = {}, edge factor = {})", k, edge_factor);
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<8} | {:<15} | {:<15} | {:<10}",
             "Vertices", "Edges", "Paths", "Yen (ms)", "Parallel (ms)", "Speedup");
    println!("-----------------------------------------------------");
    for row in &rows {
        println!("{:<10} | {:<10} | {:<8} | {:<15.2} | {:<15.2} | {:<10.2}",
                 row.vertices,
                 row.edges,
                 row.paths_found,
                 row.sequential_ms,
                 row.parallel_ms,
                 row.sequential_ms / row.parallel_ms.max(f64::EPSILON));
    }
}
