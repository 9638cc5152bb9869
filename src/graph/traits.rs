use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::Result;

/// Identifier of a vertex. Vertices are opaque tokens compared by equality only.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Debug {}

/// An outgoing edge; its origin is the vertex whose adjacency list holds it
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V, W> {
    /// Destination vertex
    pub to: V,
    /// Travel cost, always non-negative
    pub weight: W,
}

/// Trait representing a weighted directed graph
pub trait Graph<V, W>: Debug
where
    V: VertexId,
    W: Float + Debug,
{
    /// Returns the number of registered vertices
    fn node_count(&self) -> usize;

    /// Returns the number of edges, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of `vertex` in insertion order.
    /// An unknown vertex simply has no edges.
    fn neighbors(&self, vertex: &V) -> &[Edge<V, W>];

    /// Returns every registered vertex, in no particular order
    fn nodes(&self) -> Vec<V>;

    /// Returns true if the vertex has been registered
    fn contains_node(&self, vertex: &V) -> bool;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: VertexId,
    W: Float + Debug,
{
    /// Registers a vertex with no outgoing edges. Adding a known vertex is a no-op.
    fn add_node(&mut self, vertex: V);

    /// Adds a directed edge, registering both endpoints if needed.
    ///
    /// Fails with [`crate::Error::InvalidWeight`] for a negative or NaN weight,
    /// in which case the graph is left untouched.
    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()>;
}
