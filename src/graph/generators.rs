use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with `n` vertices labelled `v0..v{n-1}` and
/// roughly `edge_factor * n` edges with weights in `[1, 100)`.
/// The same seed always yields the same graph.
pub fn generate_random_graph(n: usize, edge_factor: f64, seed: u64) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        graph.add_vertex(&format!("v{}", i));
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            // Endpoints are known and the weight is positive
            let _ = graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a 4-connected `width` x `height` grid with unit weights in both
/// directions. Vertex `(x, y)` is labelled `"x,y"` and has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(&format!("{},{}", x, y));
        }
    }

    let index = |x: usize, y: usize| y * width + x;
    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            let mut neighbors = Vec::with_capacity(4);
            if x > 0 {
                neighbors.push(index(x - 1, y));
            }
            if x + 1 < width {
                neighbors.push(index(x + 1, y));
            }
            if y > 0 {
                neighbors.push(index(x, y - 1));
            }
            if y + 1 < height {
                neighbors.push(index(x, y + 1));
            }
            for neighbor in neighbors {
                let _ = graph.add_edge(current, neighbor, OrderedFloat(1.0));
            }
        }
    }

    graph
}
