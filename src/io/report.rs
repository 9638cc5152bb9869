use std::fmt;

use serde::Serialize;

use crate::planner::RouteOutcome;

/// The printable result of one route query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub nodes: usize,
    pub edges: usize,
    pub source: String,
    pub target: String,
    pub reachable: bool,
    /// Empty when the target is unreachable
    pub path: Vec<String>,
    pub cost: Option<f64>,
}

impl RouteReport {
    pub fn new(
        nodes: usize,
        edges: usize,
        source: &str,
        target: &str,
        outcome: &RouteOutcome<String, f64>,
    ) -> Self {
        let (path, cost) = match outcome {
            RouteOutcome::Found(route) => (route.path.clone(), Some(route.cost)),
            RouteOutcome::Unreachable => (Vec::new(), None),
        };

        RouteReport {
            nodes,
            edges,
            source: source.to_string(),
            target: target.to_string(),
            reachable: cost.is_some(),
            path,
            cost,
        }
    }

    /// Pretty printed JSON form of the report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph loaded with {} nodes and {} edges.",
            self.nodes, self.edges
        )?;
        writeln!(f, "Source: {}, Target: {}", self.source, self.target)?;

        match self.cost {
            Some(cost) if self.reachable => {
                writeln!(f, "Fastest route: {}", self.path.join("->"))?;
                write!(f, "Total cost: {:.2}", cost)
            }
            _ => write!(f, "No route from {} to {}.", self.source, self.target),
        }
    }
}
