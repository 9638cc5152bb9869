use crate::graph::{DirectedGraph, MutableGraph};
use rand::Rng;

/// Generates a random directed graph with `n` vertices named `"0"..n`
/// and approximately `edge_factor * n` edges weighted in `[1, 100)`.
/// Self-loops are skipped, parallel edges may occur.
pub fn random_graph<R: Rng>(n: usize, edge_factor: f64, rng: &mut R) -> DirectedGraph<String, f64> {
    let mut graph = DirectedGraph::with_capacity(n);

    for v in 0..n {
        graph.add_node(v.to_string());
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph
                .add_edge(u.to_string(), v.to_string(), weight)
                .expect("generated weights are non-negative");
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-weight edges between
/// 4-connected neighbours in both directions. Vertices are named `"x,y"`.
pub fn grid_graph(width: usize, height: usize) -> DirectedGraph<String, f64> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let name = |x: usize, y: usize| format!("{},{}", x, y);

    for y in 0..height {
        for x in 0..width {
            graph.add_node(name(x, y));

            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push((x - 1, y));
            }
            if x + 1 < width {
                neighbours.push((x + 1, y));
            }
            if y > 0 {
                neighbours.push((x, y - 1));
            }
            if y + 1 < height {
                neighbours.push((x, y + 1));
            }

            for (nx, ny) in neighbours {
                graph
                    .add_edge(name(x, y), name(nx, ny), 1.0)
                    .expect("generated weights are non-negative");
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_graph_has_requested_vertices() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_graph(50, 3.0, &mut rng);
        assert_eq!(graph.node_count(), 50);
        assert!(graph.edge_count() <= 150);
        for v in graph.nodes() {
            assert!(graph.neighbors(&v).iter().all(|e| e.to != v && e.weight >= 1.0));
        }
    }

    #[test]
    fn grid_graph_edge_count() {
        let graph = grid_graph(4, 3);
        assert_eq!(graph.node_count(), 12);
        // 2 * (horizontal + vertical) adjacent pairs
        assert_eq!(graph.edge_count(), 2 * (3 * 3 + 4 * 2));
        assert_eq!(graph.neighbors(&"0,0".to_string()).len(), 2);
        assert_eq!(graph.neighbors(&"1,1".to_string()).len(), 4);
    }
}
