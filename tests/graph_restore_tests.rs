use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;
use yen_ksp::graph::generators::generate_random_graph;
use yen_ksp::graph::{Graph, MutableGraph};
use yen_ksp::Edge;

#[test]
fn test_random_removals_restore_exactly() {
    let original = generate_random_graph(60, 5.0, 3);
    let mut graph = original.clone();
    let mut rng = StdRng::seed_from_u64(17);

    for _ in 0..50 {
        let mut removed: Vec<Edge<OrderedFloat<f64>>> = Vec::new();
        for _ in 0..rng.gen_range(1..6) {
            removed.extend(graph.remove_vertex(rng.gen_range(0..60)));
        }
        for _ in 0..rng.gen_range(1..10) {
            let (u, v) = (rng.gen_range(0..60), rng.gen_range(0..60));
            removed.extend(graph.remove_edge(u, v));
        }

        assert_eq!(graph.edge_count() + removed.len(), original.edge_count());
        removed.shuffle(&mut rng);
        graph.add_edges(removed).unwrap();
        assert_eq!(graph, original);
    }
}

#[test]
fn test_removed_vertex_is_isolated_but_present() {
    let mut graph = generate_random_graph(30, 4.0, 5);
    let removed = graph.remove_vertex(4);

    assert!(graph.has_vertex(4));
    assert_eq!(graph.vertex_count(), 30);
    assert!(graph.neighbors(4).is_empty());
    assert!(graph.predecessors(4).is_empty());
    assert!(removed.iter().all(|e| e.from == 4 || e.to == 4));
    for v in 0..30 {
        assert!(!graph.neighbors(v).contains(&4));
        assert!(!graph.predecessors(v).contains(&4));
    }
}

#[test]
fn test_restore_reports_bad_edges() {
    let mut graph = generate_random_graph(5, 2.0, 1);
    let bogus = vec![Edge::new(0, 99, OrderedFloat(1.0))];
    assert!(graph.add_edges(bogus).is_err());
}
