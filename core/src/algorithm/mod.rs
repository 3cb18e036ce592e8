//! Algorithm layer: shared node types and the flow algorithms built on them

pub mod types;
pub mod graph;

pub use self::types::*;
pub use self::graph::*;
