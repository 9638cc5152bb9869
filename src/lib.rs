//! Route Planner - shortest routes over weighted directed graphs
//!
//! This library computes the cheapest route between two named locations of a
//! transportation network modelled as a weighted directed graph. Distances are
//! computed with Dijkstra's label-setting algorithm over a lazy-deletion
//! priority frontier, and routes are recovered by walking predecessor links.
//!
//! Edge weights must be non-negative; this is enforced when edges are added,
//! so the algorithm itself never fails.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod planner;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use planner::{plan_route, Route, RouteOutcome};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid edge weight {weight}: edge weights must be non-negative")]
    InvalidWeight { weight: f64 },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
