pub mod traits;
pub mod dijkstra;
pub mod path;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use path::{path_cost, reconstruct};
