//! Single route queries: run the engine once, then turn its result into
//! either a route with its cost or an explicit unreachable outcome.

use std::fmt::Debug;
use log::debug;
use num_traits::Float;

use crate::algorithm::{reconstruct, ShortestPathAlgorithm};
use crate::graph::{Graph, VertexId};

/// A route from source to target and its total cost
#[derive(Debug, Clone, PartialEq)]
pub struct Route<V, W> {
    /// Vertices from source to target inclusive
    pub path: Vec<V>,
    /// Sum of edge weights along `path`
    pub cost: W,
}

/// Outcome of a route query. Unreachability is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome<V, W> {
    Found(Route<V, W>),
    Unreachable,
}

impl<V, W> RouteOutcome<V, W> {
    /// Returns the route if one was found
    pub fn route(&self) -> Option<&Route<V, W>> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::Unreachable => None,
        }
    }

    /// Returns true if no route reaches the target
    pub fn is_unreachable(&self) -> bool {
        matches!(self, RouteOutcome::Unreachable)
    }
}

/// Computes the cheapest route from `source` to `target` with `algorithm`.
pub fn plan_route<V, W, G, A>(algorithm: &A, graph: &G, source: &V, target: &V) -> RouteOutcome<V, W>
where
    V: VertexId,
    W: Float + Debug,
    G: Graph<V, W>,
    A: ShortestPathAlgorithm<V, W, G>,
{
    debug!(
        "Planning route {:?} -> {:?} with {} over {} nodes and {} edges",
        source,
        target,
        algorithm.name(),
        graph.node_count(),
        graph.edge_count()
    );

    let result = algorithm.compute_shortest_paths(graph, source);
    let cost = result.distance(target);
    if !cost.is_finite() {
        debug!("No route from {:?} to {:?}", source, target);
        return RouteOutcome::Unreachable;
    }

    let path = reconstruct(&result, source, target);
    if path.is_empty() {
        return RouteOutcome::Unreachable;
    }

    debug!("Found route of {} hops, cost {:?}", path.len() - 1, cost);
    RouteOutcome::Found(Route { path, cost })
}
