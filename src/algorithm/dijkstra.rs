use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use log::{debug, trace};
use num_traits::Float;

use crate::graph::{Graph, VertexId};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;

/// Classic Dijkstra's algorithm implementation
///
/// Uses a binary-heap frontier without decrease-key: improved distances are
/// pushed as new entries and entries for already finalized vertices are
/// skipped when popped. Correct only for non-negative weights, which
/// [`crate::graph::MutableGraph::add_edge`] guarantees.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: VertexId,
    W: Float + Debug,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> ShortestPathResult<V, W> {
        // Every known vertex starts at infinity, the source at zero
        let mut distances: HashMap<V, W> = graph
            .nodes()
            .into_iter()
            .map(|v| (v, W::infinity()))
            .collect();
        distances.insert(source.clone(), W::zero());

        let mut predecessors: HashMap<V, V> = HashMap::new();
        let mut finalized: HashSet<V> = HashSet::with_capacity(distances.len());

        let mut frontier = Frontier::new();
        frontier.push(source.clone(), W::zero());

        let mut stale = 0usize;
        while let Some((u, dist_u)) = frontier.pop() {
            // Left behind by an earlier relaxation
            if finalized.contains(&u) {
                stale += 1;
                trace!("Skipping stale frontier entry {:?} at {:?}", u, dist_u);
                continue;
            }
            finalized.insert(u.clone());

            for edge in graph.neighbors(&u) {
                let candidate = dist_u + edge.weight;
                let current = distances
                    .get(&edge.to)
                    .copied()
                    .unwrap_or_else(W::infinity);

                if candidate < current {
                    trace!("Relaxed {:?} -> {:?}: {:?}", u, edge.to, candidate);
                    distances.insert(edge.to.clone(), candidate);
                    predecessors.insert(edge.to.clone(), u.clone());
                    frontier.push(edge.to.clone(), candidate);
                }
            }
        }

        debug!(
            "Dijkstra from {:?}: {} vertices finalized, {} frontier pushes, {} stale entries",
            source,
            finalized.len(),
            frontier.pushed(),
            stale
        );

        ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        }
    }
}
