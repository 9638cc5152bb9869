use crate::graph::traits::{Edge, Graph, MutableGraph, VertexId};
use crate::{Error, Result};
use log::{trace, warn};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Debug,
{
    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    adjacency: HashMap<V, Vec<Edge<V, W>>>,

    /// Total number of edges, kept in step with `adjacency`
    edge_count: usize,
}

impl<V, W> DirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            adjacency: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, stopping at the first invalid weight
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Debug,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: &V) -> &[Edge<V, W>] {
        match self.adjacency.get(vertex) {
            Some(edges) => edges.as_slice(),
            None => &[],
        }
    }

    fn nodes(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    fn contains_node(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for DirectedGraph<V, W>
where
    V: VertexId,
    W: Float + Debug,
{
    fn add_node(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        // NaN fails this comparison too
        if !(weight >= W::zero()) {
            let weight = weight.to_f64().unwrap_or(f64::NAN);
            warn!("Rejected edge {:?} -> {:?} with weight {}", from, to, weight);
            return Err(Error::InvalidWeight { weight });
        }

        trace!("Adding edge {:?} -> {:?} ({:?})", from, to, weight);
        self.add_node(to.clone());
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { to, weight });
        self.edge_count += 1;
        Ok(())
    }
}
