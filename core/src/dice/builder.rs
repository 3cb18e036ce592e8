//! Flow network construction for one word over a dice set
//!
//! Layout over `2 + D + L` nodes:
//!
//! ```text
//! 0            source
//! 1 ..= D      die i at node 1 + i
//! D+1 ..= D+L  letter position j at node 1 + D + j
//! D+L+1        sink
//! ```
//!
//! Every edge has capacity 1: source -> die, die -> position when the die
//! carries that letter, position -> sink.

use log::trace;

use crate::algorithm::graph::max_flow::{FlowError, FlowNetwork, ResidualCapacity};
use crate::algorithm::types::NodeId;
use crate::dice::{DiceSet, Word};

/// Node numbering of a dice/word network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkLayout {
    pub dice_count: usize,
    pub word_len: usize,
}

impl NetworkLayout {
    pub fn new(dice_count: usize, word_len: usize) -> Self {
        Self { dice_count, word_len }
    }

    pub fn node_count(&self) -> usize {
        2 + self.dice_count + self.word_len
    }

    pub fn source(&self) -> NodeId {
        NodeId(0)
    }

    pub fn sink(&self) -> NodeId {
        NodeId(self.node_count() - 1)
    }

    #[inline]
    pub fn die_node(&self, die: usize) -> NodeId {
        debug_assert!(die < self.dice_count);
        NodeId(1 + die)
    }

    #[inline]
    pub fn letter_node(&self, position: usize) -> NodeId {
        debug_assert!(position < self.word_len);
        NodeId(1 + self.dice_count + position)
    }

    pub fn die_nodes(&self) -> Vec<NodeId> {
        (0..self.dice_count).map(|i| self.die_node(i)).collect()
    }

    pub fn letter_nodes(&self) -> Vec<NodeId> {
        (0..self.word_len).map(|j| self.letter_node(j)).collect()
    }
}

/// Builds a fresh network per word; holds only a borrow of the dice
#[derive(Debug, Clone, Copy)]
pub struct FlowNetworkBuilder<'a> {
    dice: &'a DiceSet,
}

impl<'a> FlowNetworkBuilder<'a> {
    pub fn new(dice: &'a DiceSet) -> Self {
        Self { dice }
    }

    /// Errors only if the layout's source and sink fail network validation,
    /// which a layout of at least two nodes never does
    pub fn build<C: ResidualCapacity>(
        &self,
        word: &Word,
    ) -> Result<(FlowNetwork<C>, NetworkLayout), FlowError> {
        let layout = NetworkLayout::new(self.dice.len(), word.len());
        let source = layout.source();
        let sink = layout.sink();
        let mut network = FlowNetwork::new(layout.node_count(), source, sink)?;

        for i in 0..layout.dice_count {
            network.add_edge(source, layout.die_node(i), 1);
        }

        let mut letter_edges = 0usize;
        for (i, die) in self.dice.iter().enumerate() {
            for (j, &letter) in word.letters().iter().enumerate() {
                if die.contains(letter) {
                    network.add_edge(layout.die_node(i), layout.letter_node(j), 1);
                    letter_edges += 1;
                }
            }
        }

        for j in 0..layout.word_len {
            network.add_edge(layout.letter_node(j), sink, 1);
        }

        trace!(
            "built network for '{}': {} nodes, {} die-letter edges",
            word,
            layout.node_count(),
            letter_edges
        );

        Ok((network, layout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::graph::max_flow::{DenseCapacity, SparseCapacity};

    #[test]
    fn test_layout_numbering() {
        let layout = NetworkLayout::new(2, 3);
        assert_eq!(layout.node_count(), 7);
        assert_eq!(layout.source(), NodeId(0));
        assert_eq!(layout.sink(), NodeId(6));
        assert_eq!(layout.die_nodes(), vec![NodeId(1), NodeId(2)]);
        assert_eq!(layout.letter_nodes(), vec![NodeId(3), NodeId(4), NodeId(5)]);
    }

    #[test]
    fn test_edges_follow_letters() {
        let dice: DiceSet = ["AB", "CD"].into_iter().collect();
        let (network, layout) = FlowNetworkBuilder::new(&dice).build::<DenseCapacity>(&Word::new("AC")).unwrap();

        let (d0, d1) = (layout.die_node(0), layout.die_node(1));
        let (l0, l1) = (layout.letter_node(0), layout.letter_node(1));

        assert_eq!(network.residual(layout.source(), d0), 1);
        assert_eq!(network.residual(layout.source(), d1), 1);
        assert_eq!(network.residual(d0, l0), 1);
        assert_eq!(network.residual(d0, l1), 0);
        assert_eq!(network.residual(d1, l0), 0);
        assert_eq!(network.residual(d1, l1), 1);
        assert_eq!(network.residual(l0, layout.sink()), 1);
        assert_eq!(network.residual(l1, layout.sink()), 1);
        // 2 source edges + 2 letter edges + 2 sink edges
        assert_eq!(network.edge_count(), 6);
    }

    #[test]
    fn test_repeated_letters_get_separate_nodes() {
        let dice: DiceSet = ["AAB"].into_iter().collect();
        let (network, layout) = FlowNetworkBuilder::new(&dice).build::<SparseCapacity>(&Word::new("AA")).unwrap();
        assert_eq!(layout.word_len, 2);
        assert_eq!(network.residual(layout.die_node(0), layout.letter_node(0)), 1);
        assert_eq!(network.residual(layout.die_node(0), layout.letter_node(1)), 1);
    }

    #[test]
    fn test_no_edges_inside_a_layer_or_into_source() {
        let dice: DiceSet = ["AB", "AB"].into_iter().collect();
        let (network, layout) = FlowNetworkBuilder::new(&dice).build::<DenseCapacity>(&Word::new("AB")).unwrap();
        let n = layout.node_count();
        for u in 0..n {
            assert_eq!(network.residual(NodeId(u), layout.source()), 0);
            assert_eq!(network.residual(layout.sink(), NodeId(u)), 0);
        }
        assert_eq!(network.residual(layout.die_node(0), layout.die_node(1)), 0);
        assert_eq!(network.residual(layout.letter_node(0), layout.letter_node(1)), 0);
    }

    #[test]
    fn test_degenerate_networks() {
        let empty = DiceSet::default();
        let (network, layout) = FlowNetworkBuilder::new(&empty).build::<DenseCapacity>(&Word::new("A")).unwrap();
        assert_eq!(network.vertex_count(), 3);
        assert_eq!(network.edge_count(), 1);
        assert_eq!(layout.sink(), NodeId(2));

        let dice: DiceSet = ["XYZ"].into_iter().collect();
        let (network, layout) = FlowNetworkBuilder::new(&dice).build::<DenseCapacity>(&Word::new("")).unwrap();
        assert_eq!(network.vertex_count(), 3);
        assert_eq!(network.edge_count(), 1);
        assert_eq!(network.source(), layout.source());
        assert_eq!(network.sink(), layout.sink());
        assert_ne!(network.source(), network.sink());
    }
}
