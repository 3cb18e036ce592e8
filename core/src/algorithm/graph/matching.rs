//! Bipartite matching recovery from a solved flow network
//!
//! A unit-capacity edge between the two sides that was open before solving
//! and is saturated afterwards carried exactly one unit of flow, so it is a
//! matched pair.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::algorithm::graph::max_flow::ResidualCapacity;
use crate::algorithm::types::NodeId;

/// Matching over a bipartite layer: for each right-side node, the index of
/// its left-side partner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BipartiteMatching {
    partners: Vec<Option<usize>>,
}

impl BipartiteMatching {
    /// Reads matched pairs off the saturated left -> right edges.
    ///
    /// Scans every left node for every right node; when several saturated
    /// edges end at the same right node the last left index wins.
    pub fn recover<C: ResidualCapacity>(
        original: &C,
        solved: &C,
        left: &[NodeId],
        right: &[NodeId],
    ) -> Self {
        let mut partners = vec![None; right.len()];
        for (i, &l) in left.iter().enumerate() {
            for (j, &r) in right.iter().enumerate() {
                if original.get(l, r) == 1 && solved.get(l, r) == 0 {
                    partners[j] = Some(i);
                }
            }
        }
        Self { partners }
    }

    pub fn partners(&self) -> &[Option<usize>] {
        &self.partners
    }

    pub fn into_partners(self) -> Vec<Option<usize>> {
        self.partners
    }

    /// Count of right-side nodes with a partner
    pub fn size(&self) -> usize {
        self.partners.iter().filter(|p| p.is_some()).count()
    }

    /// True when every right-side node is matched
    pub fn is_complete(&self) -> bool {
        self.partners.iter().all(Option::is_some)
    }

    /// True when no left index is used twice
    pub fn is_injective(&self) -> bool {
        let mut seen = HashSet::new();
        self.partners.iter().flatten().all(|&i| seen.insert(i))
    }

    /// The full partner list, if every right-side node is matched
    pub fn complete(&self) -> Option<Vec<usize>> {
        self.partners.iter().copied().collect()
    }
}

/// Free-function form of [`BipartiteMatching::recover`]
pub fn recover_matching<C: ResidualCapacity>(
    original: &C,
    solved: &C,
    left: &[NodeId],
    right: &[NodeId],
) -> Vec<Option<usize>> {
    BipartiteMatching::recover(original, solved, left, right).into_partners()
}
