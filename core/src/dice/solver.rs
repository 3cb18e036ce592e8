//! Per-word pipeline: build the network, run max flow, read off the dice

use log::{debug, warn};

use crate::algorithm::graph::matching::BipartiteMatching;
use crate::algorithm::graph::max_flow::{
    CapacityStorage, DenseCapacity, Flow, FlowError, FlowMetrics, MaxFlowSolver, ResidualCapacity,
    SparseCapacity,
};
use crate::config::SolverConfig;
use crate::dice::builder::FlowNetworkBuilder;
use crate::dice::report::SpellOutcome;
use crate::dice::{DiceSet, Word};

/// Everything learned about one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSolution {
    pub outcome: SpellOutcome,
    pub max_flow: Flow,
    pub metrics: FlowMetrics,
}

/// Answers spellability queries; keeps no state between words
#[derive(Debug, Clone, Default)]
pub struct WordSolver {
    config: SolverConfig,
}

impl WordSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn solve(&self, dice: &DiceSet, word: &Word) -> Result<WordSolution, FlowError> {
        match self.config.storage {
            CapacityStorage::Dense => self.solve_with::<DenseCapacity>(dice, word),
            CapacityStorage::Sparse => self.solve_with::<SparseCapacity>(dice, word),
        }
    }

    fn solve_with<C: ResidualCapacity>(
        &self,
        dice: &DiceSet,
        word: &Word,
    ) -> Result<WordSolution, FlowError> {
        let (mut network, layout) = FlowNetworkBuilder::new(dice).build::<C>(word)?;
        let original = network.snapshot();

        let result = MaxFlowSolver::new()
            .with_early_exit(self.config.early_exit)
            .solve(&mut network);
        debug!("'{}': max flow {} of {}", word, result.max_flow, layout.word_len);

        let unspellable = || WordSolution {
            outcome: SpellOutcome::Unspellable {
                word: word.to_string(),
            },
            max_flow: result.max_flow,
            metrics: result.metrics,
        };

        if result.max_flow as usize != layout.word_len {
            return Ok(unspellable());
        }

        let matching = BipartiteMatching::recover(
            &original,
            network.capacities(),
            &layout.die_nodes(),
            &layout.letter_nodes(),
        );

        let assignment = match matching.complete() {
            Some(assignment) => assignment,
            None => {
                warn!("'{}': flow {} but {} positions matched", word, result.max_flow, matching.size());
                return Ok(unspellable());
            }
        };

        if self.config.verify_assignment && !Self::is_valid(dice, word, &matching, &assignment) {
            warn!("'{}': recovered assignment {:?} failed verification", word, assignment);
            return Ok(unspellable());
        }

        Ok(WordSolution {
            outcome: SpellOutcome::Spelled {
                word: word.to_string(),
                dice: assignment,
            },
            max_flow: result.max_flow,
            metrics: result.metrics,
        })
    }

    fn is_valid(dice: &DiceSet, word: &Word, matching: &BipartiteMatching, assignment: &[usize]) -> bool {
        matching.is_injective()
            && assignment
                .iter()
                .zip(word.letters())
                .all(|(&i, &letter)| dice.get(i).is_some_and(|die| die.contains(letter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice(faces: &[&str]) -> DiceSet {
        faces.iter().copied().collect()
    }

    fn line(config: SolverConfig, faces: &[&str], word: &str) -> String {
        WordSolver::new(config)
            .solve(&dice(faces), &Word::new(word))
            .unwrap()
            .outcome
            .to_string()
    }

    #[test]
    fn test_distinct_dice() {
        assert_eq!(line(SolverConfig::default(), &["AB", "CD"], "AC"), "0,1: AC");
    }

    #[test]
    fn test_one_die_cannot_cover_two_letters() {
        let solution = WordSolver::default().solve(&dice(&["AB"]), &Word::new("AB")).unwrap();
        assert_eq!(solution.max_flow, 1);
        assert_eq!(solution.outcome.to_string(), "Cannot spell AB");
    }

    #[test]
    fn test_missing_letter() {
        let solution = WordSolver::default().solve(&dice(&["AB"]), &Word::new("C")).unwrap();
        assert_eq!(solution.max_flow, 0);
        assert!(!solution.outcome.is_spelled());
    }

    #[test]
    fn test_empty_word_is_trivially_spelled() {
        let solution = WordSolver::default().solve(&dice(&["XYZ"]), &Word::new("")).unwrap();
        assert_eq!(solution.max_flow, 0);
        assert_eq!(solution.outcome.assignment(), Some(&[][..]));
    }

    #[test]
    fn test_sparse_without_verification_matches_default() {
        let config = SolverConfig {
            storage: CapacityStorage::Sparse,
            early_exit: false,
            verify_assignment: false,
        };
        let faces = ["ENT", "AOE", "CAT", "TAB"];
        for word in ["CAT", "TEA", "BEAT", "TACT"] {
            assert_eq!(line(config, &faces, word), line(SolverConfig::default(), &faces, word));
        }
    }

    #[test]
    fn test_reroute_needed_for_perfect_assignment() {
        // die 0 reaches both letters; die 1 only the first, so die 0 must take 'B'
        assert_eq!(line(SolverConfig::default(), &["AB", "A"], "AB"), "1,0: AB");
    }

    #[test]
    fn test_validity_check_rejects_wrong_letters() {
        let faces = dice(&["AB", "CD"]);
        let word = Word::new("AC");
        let matching = BipartiteMatching::recover(
            &DenseCapacity::with_nodes(1),
            &DenseCapacity::with_nodes(1),
            &[],
            &[],
        );
        assert!(WordSolver::is_valid(&faces, &word, &matching, &[0, 1]));
        assert!(!WordSolver::is_valid(&faces, &word, &matching, &[1, 0]));
        assert!(!WordSolver::is_valid(&faces, &word, &matching, &[0, 5]));
    }
}
