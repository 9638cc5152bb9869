use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::Float;

use crate::algorithm::path;
use crate::graph::{Graph, VertexId};

/// Result of a shortest path algorithm execution
///
/// Vertices missing from `distances` are at infinite distance from the
/// source. The source and unreached vertices have no predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<V, W>
where
    V: VertexId,
    W: Float + Debug,
{
    /// Distances from source to each vertex
    pub distances: HashMap<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: HashMap<V, V>,

    /// Source vertex
    pub source: V,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: VertexId,
    W: Float + Debug,
{
    /// Distance from the source, `W::infinity()` when `vertex` was never reached
    pub fn distance(&self, vertex: &V) -> W {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or_else(W::infinity)
    }

    /// The vertex preceding `vertex` on its shortest path
    pub fn predecessor(&self, vertex: &V) -> Option<&V> {
        self.predecessors.get(vertex)
    }

    /// Returns true if `vertex` has a finite distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_finite()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Shortest path from the source to `target`; empty when unreachable
    pub fn path_to(&self, target: &V) -> Vec<V> {
        path::reconstruct(self, &self.source, target)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: VertexId,
    W: Float + Debug,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices.
    ///
    /// Every call starts from scratch; no state is kept between calls.
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> ShortestPathResult<V, W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
