//! Word dice
//!
//! Decides whether a word can be spelled from a set of letter dice, one die
//! per letter position, and if so which die covers which position. The
//! question is a bipartite matching between dice and positions, answered by
//! Edmonds-Karp maximum flow over a unit-capacity network:
//!
//! ```text
//! source -> die -> letter position -> sink
//! ```
//!
//! The word is spellable exactly when the maximum flow equals its length;
//! the saturated die -> position edges are the assignment.
//!
//! ```
//! use worddice_core::{solve_word, DiceSet, Word};
//!
//! let dice: DiceSet = ["AB", "CD"].into_iter().collect();
//! assert_eq!(solve_word(&dice, &Word::new("AC"))?.to_string(), "0,1: AC");
//! assert_eq!(solve_word(&dice, &Word::new("AB"))?.to_string(), "Cannot spell AB");
//! # Ok::<(), worddice_core::FlowError>(())
//! ```

pub mod algorithm;
pub mod app;
pub mod config;
pub mod dice;
pub mod input;

pub use crate::algorithm::graph::{CapacityStorage, FlowError, FlowMetrics, MaxFlowResult, MaxFlowSolver};
pub use crate::app::{run, RunError, RunSummary};
pub use crate::config::{ConfigError, SolverConfig};
pub use crate::dice::{DiceSet, Die, SpellOutcome, Word, WordSolution, WordSolver};
pub use crate::input::{InputError, InputKind};

/// Spell `word` with the default configuration
pub fn solve_word(dice: &DiceSet, word: &Word) -> Result<SpellOutcome, FlowError> {
    Ok(WordSolver::default().solve(dice, word)?.outcome)
}
