//! Text input and report output around the routing core.

pub mod input;
pub mod report;

pub use input::{parse_problem, read_problem, InputError, RouteProblem};
pub use report::RouteReport;
