//! Graph topology: the 3-coloring-encoded computation.
//!
//! - [`ThreeColorGraph`]: the graph builder and tri-state anchors

mod graph;

pub use graph::{ThreeColorGraph, VertexId};
