use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::ShortestPathResult;
use crate::graph::{Graph, VertexId};

/// Recovers the vertex sequence from `source` to `target` by walking the
/// predecessor links of `result` backwards.
///
/// Returns `[source]` when `target == source`, and an empty path when the
/// walk ends at a vertex without predecessor before reaching `source`
/// (the target is unreachable). Predecessor chains produced by
/// [`crate::Dijkstra`] are acyclic, so the walk always terminates.
pub fn reconstruct<V, W>(result: &ShortestPathResult<V, W>, source: &V, target: &V) -> Vec<V>
where
    V: VertexId,
    W: Float + Debug,
{
    if target == source {
        return vec![source.clone()];
    }

    let mut path = vec![target.clone()];
    let mut current = target;
    while current != source {
        match result.predecessor(current) {
            Some(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

/// Total weight of `path` in `graph`, using the cheapest parallel edge
/// between consecutive vertices. `None` if some hop has no edge.
pub fn path_cost<V, W, G>(graph: &G, path: &[V]) -> Option<W>
where
    V: VertexId,
    W: Float + Debug,
    G: Graph<V, W>,
{
    path.windows(2).try_fold(W::zero(), |total, hop| {
        graph
            .neighbors(&hop[0])
            .iter()
            .filter(|edge| edge.to == hop[1])
            .map(|edge| edge.weight)
            .fold(None, |best: Option<W>, w| Some(best.map_or(w, |b| b.min(w))))
            .map(|w| total + w)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use std::collections::HashMap;

    fn result_with(preds: &[(&'static str, &'static str)]) -> ShortestPathResult<&'static str, f64> {
        ShortestPathResult {
            distances: HashMap::new(),
            predecessors: preds.iter().copied().collect(),
            source: "s",
        }
    }

    #[test]
    fn walks_back_to_the_source() {
        let result = result_with(&[("a", "s"), ("b", "a"), ("t", "b")]);
        assert_eq!(reconstruct(&result, &"s", &"t"), vec!["s", "a", "b", "t"]);
    }

    #[test]
    fn target_equal_to_source_is_a_single_vertex() {
        let result = result_with(&[]);
        assert_eq!(reconstruct(&result, &"s", &"s"), vec!["s"]);
    }

    #[test]
    fn broken_chain_means_unreachable() {
        let result = result_with(&[("b", "a"), ("t", "b")]);
        assert!(reconstruct(&result, &"s", &"t").is_empty());
        assert!(reconstruct(&result, &"s", &"unknown").is_empty());
    }

    #[test]
    fn path_cost_picks_cheapest_parallel_edge() {
        let graph: DirectedGraph<&str, f64> =
            DirectedGraph::from_edges(vec![("a", "b", 5.0), ("a", "b", 2.0), ("b", "c", 1.5)])
                .unwrap();
        assert_eq!(path_cost(&graph, &["a", "b", "c"]), Some(3.5));
        assert_eq!(path_cost(&graph, &["a"]), Some(0.0));
        assert_eq!(path_cost(&graph, &["a", "c"]), None);
    }
}
