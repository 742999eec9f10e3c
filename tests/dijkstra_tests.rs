use ordered_float::OrderedFloat;
use yen_ksp::graph::generators::generate_grid;
use yen_ksp::graph::{DirectedGraph, Graph, MutableGraph, VertexId};
use yen_ksp::{Dijkstra, Error, Path, ShortestPathAlgorithm, ShortestPathResult};

type W = OrderedFloat<f64>;

// Grid with cardinal moves of cost 1.0 and diagonal moves of cost 1.4
fn create_test_grid(width: usize, height: usize) -> DirectedGraph<W> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            graph.add_vertex(&format!("{},{}", x, y));
        }
    }

    let directions = [
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx >= 0 && ny >= 0 && nx < width as i32 && ny < height as i32 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, OrderedFloat(cost)).unwrap();
                }
            }
        }
    }
    graph
}

fn assert_walk(graph: &DirectedGraph<W>, path: &Path<W>, source: VertexId, target: VertexId) {
    let vertices = path.vertices();
    assert_eq!(vertices[0], source, "Path should start at source");
    assert_eq!(vertices[vertices.len() - 1], target, "Path should end at target");
    for i in 1..vertices.len() {
        assert!(
            graph.has_edge(vertices[i - 1], vertices[i]),
            "Path should be continuous: no edge {} -> {}",
            vertices[i - 1],
            vertices[i]
        );
    }
}

#[test]
fn test_path_finding_simple_grid() {
    let graph = create_test_grid(10, 10);
    let source = 0;
    let target = 99;

    let dijkstra = Dijkstra::new();
    let result: ShortestPathResult<W> = dijkstra.compute_shortest_paths(&graph, source).unwrap();
    assert!(result.distances[target].is_some(), "Dijkstra should find a path");

    let path = <Dijkstra as ShortestPathAlgorithm<W, DirectedGraph<W>>>::get_path(&dijkstra, &result, target)
        .expect("Dijkstra should construct a path");
    assert_walk(&graph, &path, source, target);

    // Nine diagonal steps beat any route using cardinal moves
    assert_eq!(path.size(), 9);
    assert_eq!(Some(path.total_cost()), result.distances[target]);
    assert!((path.total_cost().into_inner() - 9.0 * 1.4).abs() < 1e-9);
}

#[test]
fn test_distances_on_unit_grid_are_manhattan() {
    let (width, height) = (6, 4);
    let graph = generate_grid(width, height);
    let result: ShortestPathResult<W> = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();

    for y in 0..height {
        for x in 0..width {
            let vertex = graph.vertex_id(&format!("{},{}", x, y)).unwrap();
            assert_eq!(
                result.distances[vertex],
                Some(OrderedFloat((x + y) as f64)),
                "distance to ({}, {})",
                x,
                y
            );
        }
    }
    assert_eq!(result.predecessors[0], None);
}

#[test]
fn test_path_finding_around_obstacles() {
    let original = create_test_grid(10, 10);
    let mut graph = original.clone();
    let source = 0;
    let target = 9;
    let dijkstra = Dijkstra::new();

    let direct: Path<W> = dijkstra.shortest_path(&graph, source, target).unwrap().unwrap();
    assert_eq!(direct.total_cost(), OrderedFloat(9.0));

    // Vertical wall at x = 5, open only at the bottom row
    let wall: Vec<VertexId> = (0..9).map(|y| y * 10 + 5).collect();
    let mut removed = Vec::new();
    for &vertex in &wall {
        removed.extend(graph.remove_vertex(vertex));
    }

    let detour: Path<W> = dijkstra
        .shortest_path(&graph, source, target)
        .unwrap()
        .expect("Dijkstra should find a path through the gap");
    assert_walk(&graph, &detour, source, target);
    assert!(detour.vertices().iter().all(|v| !wall.contains(v)), "Path should avoid the wall");
    assert!(detour.vertices().contains(&95), "Path should go through the gap");
    assert!(detour.total_cost() > direct.total_cost());

    // Closing the gap makes the target unreachable
    removed.extend(graph.remove_vertex(95));
    let blocked: Option<Path<W>> = dijkstra.shortest_path(&graph, source, target).unwrap();
    assert!(blocked.is_none(), "Dijkstra should report no path");
    let result: ShortestPathResult<W> = dijkstra.compute_shortest_paths(&graph, source).unwrap();
    assert!(result.distances[target].is_none());
    assert!(result.distances[4].is_some());

    graph.add_edges(removed).unwrap();
    assert_eq!(graph, original);
    let restored: Path<W> = dijkstra.shortest_path(&graph, source, target).unwrap().unwrap();
    assert_eq!(restored, direct);
}

#[test]
fn test_source_equals_target_and_invalid_vertices() {
    let graph = create_test_grid(3, 3);
    let dijkstra = Dijkstra::new();

    let trivial: Path<W> = dijkstra.shortest_path(&graph, 4, 4).unwrap().unwrap();
    assert!(trivial.is_empty());
    assert_eq!(trivial.total_cost(), OrderedFloat(0.0));
    assert_eq!(trivial.target(), 4);

    let bad_source: Result<Option<Path<W>>, Error> = dijkstra.shortest_path(&graph, 42, 0);
    assert_eq!(bad_source, Err(Error::InvalidVertex(42)));
    let bad_target: Result<Option<Path<W>>, Error> = dijkstra.shortest_path(&graph, 0, 42);
    assert_eq!(bad_target, Err(Error::InvalidVertex(42)));
}
