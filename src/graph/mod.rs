pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Edge, Graph, MutableGraph, VertexId};
pub use directed::DirectedGraph;
