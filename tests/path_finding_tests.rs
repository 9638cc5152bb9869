use route_planner::algorithm::{path_cost, ShortestPathAlgorithm};
use route_planner::graph::generators::grid_graph;
use route_planner::graph::{DirectedGraph, Graph, MutableGraph};
use route_planner::{plan_route, Dijkstra, Error, Route, RouteOutcome};

fn s(v: &str) -> String {
    v.to_string()
}

// The four-node network used throughout: 1->2->3->4 beats the direct 1->3 hop
fn sample_network() -> DirectedGraph<String, f64> {
    let mut graph = DirectedGraph::new();
    graph.add_edge(s("1"), s("2"), 1.0).unwrap();
    graph.add_edge(s("2"), s("3"), 2.0).unwrap();
    graph.add_edge(s("1"), s("3"), 4.0).unwrap();
    graph.add_edge(s("3"), s("4"), 1.0).unwrap();
    graph
}

#[test]
fn test_sample_network_route() {
    let graph = sample_network();
    let outcome = plan_route(&Dijkstra::new(), &graph, &s("1"), &s("4"));

    assert_eq!(
        outcome,
        RouteOutcome::Found(Route {
            path: vec![s("1"), s("2"), s("3"), s("4")],
            cost: 4.0,
        })
    );
    assert_eq!(format!("{:.2}", outcome.route().unwrap().cost), "4.00");
}

#[test]
fn test_source_equals_target() {
    let graph = sample_network();
    let outcome = plan_route(&Dijkstra::new(), &graph, &s("2"), &s("2"));

    let route = outcome.route().expect("a vertex always reaches itself");
    assert_eq!(route.path, vec![s("2")]);
    assert_eq!(route.cost, 0.0);
}

#[test]
fn test_disconnected_target_is_unreachable() {
    let mut graph = sample_network();
    graph.add_node(s("5"));
    graph.add_edge(s("6"), s("5"), 1.0).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, &s("1"));
    assert!(result.distance(&s("5")).is_infinite());
    assert!(result.path_to(&s("5")).is_empty());

    let outcome = plan_route(&Dijkstra::new(), &graph, &s("1"), &s("5"));
    assert_eq!(outcome, RouteOutcome::Unreachable);
}

#[test]
fn test_unknown_target_is_unreachable() {
    let graph = sample_network();
    let outcome = plan_route(&Dijkstra::new(), &graph, &s("1"), &s("42"));
    assert!(outcome.is_unreachable());
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(s("A"), s("B"), 5.0).unwrap();
    graph.add_edge(s("A"), s("B"), 2.0).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, &s("A"));
    assert_eq!(result.distance(&s("B")), 2.0);
    assert_eq!(result.path_to(&s("B")), vec![s("A"), s("B")]);
}

#[test]
fn test_negative_weight_rejected() {
    let mut graph = sample_network();
    let nodes_before = graph.node_count();
    let edges_before = graph.edge_count();

    let err = graph.add_edge(s("4"), s("1"), -0.5).unwrap_err();
    assert_eq!(err, Error::InvalidWeight { weight: -0.5 });
    assert_eq!(graph.node_count(), nodes_before);
    assert_eq!(graph.edge_count(), edges_before);
    assert!(graph.neighbors(&s("4")).is_empty());
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = grid_graph(8, 8);
    let dijkstra = Dijkstra::new();

    let first = dijkstra.compute_shortest_paths(&graph, &s("0,0"));
    let second = dijkstra.compute_shortest_paths(&graph, &s("0,0"));
    assert_eq!(first, second);
}

#[test]
fn test_grid_route_is_manhattan() {
    let graph = grid_graph(10, 10);
    let outcome = plan_route(&Dijkstra::new(), &graph, &s("0,0"), &s("9,9"));
    let route = outcome.route().expect("grid is connected");

    assert_eq!(route.cost, 18.0);
    assert_eq!(route.path.len(), 19);
    assert_eq!(route.path[0], s("0,0"));
    assert_eq!(route.path[route.path.len() - 1], s("9,9"));
    assert_eq!(path_cost(&graph, &route.path), Some(route.cost));
}

// Rebuilds a grid without the vertices of a wall in column 5
#[test]
fn test_path_finding_with_obstacles() {
    let full = grid_graph(10, 10);
    let wall: Vec<String> = (0..8).map(|y| format!("5,{}", y)).collect();

    let mut graph = DirectedGraph::new();
    for from in full.nodes() {
        if wall.contains(&from) {
            continue;
        }
        for edge in full.neighbors(&from) {
            if !wall.contains(&edge.to) {
                graph.add_edge(from.clone(), edge.to.clone(), edge.weight).unwrap();
            }
        }
    }

    let outcome = plan_route(&Dijkstra::new(), &graph, &s("0,0"), &s("9,0"));
    let route = outcome.route().expect("a path should go around the wall");

    // down to row 8, across, and back up
    assert_eq!(route.cost, 9.0 + 2.0 * 8.0);
    assert!(route.path.iter().all(|v| !wall.contains(v)));
    assert_eq!(path_cost(&graph, &route.path), Some(route.cost));
}

#[test]
fn test_predecessor_chain_length_matches_hops() {
    let graph = grid_graph(6, 4);
    let result = Dijkstra::new().compute_shortest_paths(&graph, &s("0,0"));

    for v in graph.nodes() {
        let path = result.path_to(&v);
        assert_eq!(path.first(), Some(&s("0,0")));
        assert_eq!(path.last(), Some(&v));
        assert_eq!(path_cost(&graph, &path), Some(result.distance(&v)));
    }
}
