//! Core type definitions shared by the flow algorithms
//!
//! Node indices are wrapped in [`NodeId`] so they never mix with capacities,
//! flow values or die/position indices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identifier ensuring type safety and preventing mixing with other numeric types
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_conversions() {
        let node = NodeId::from(7);
        assert_eq!(node.as_usize(), 7);
        assert_eq!(node.to_string(), "n7");
        assert!(NodeId(1) < NodeId(2));
    }

    #[test]
    fn test_node_id_serializes_as_index() {
        assert_eq!(serde_json::to_string(&NodeId(4)).unwrap(), "4");
    }
}
