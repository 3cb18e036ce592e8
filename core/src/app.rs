//! Whole-run driver: load both inputs, answer every word in order

use std::io::{self, Write};
use std::path::Path;

use log::info;

use crate::algorithm::graph::max_flow::FlowError;
use crate::config::SolverConfig;
use crate::dice::WordSolver;
use crate::input::{self, InputError};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Tally of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub words: usize,
    pub spelled: usize,
}

impl RunSummary {
    pub fn unspellable(&self) -> usize {
        self.words - self.spelled
    }
}

/// Loads the dice file then the words file, and writes one line per word to
/// `out`. Nothing is written unless both files load.
pub fn run<W: Write>(
    dice_path: &Path,
    words_path: &Path,
    config: SolverConfig,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    let dice = input::load_dice(dice_path)?;
    let words = input::load_words(words_path)?;
    info!("{} dice, {} words, {} storage", dice.len(), words.len(), config.storage);

    let solver = WordSolver::new(config);
    let mut summary = RunSummary::default();
    for word in &words {
        let solution = solver.solve(&dice, word)?;
        writeln!(out, "{}", solution.outcome)?;
        summary.words += 1;
        if solution.outcome.is_spelled() {
            summary.spelled += 1;
        }
    }
    out.flush()?;

    info!("spelled {} of {} words", summary.spelled, summary.words);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_lines_in_order() {
        let dir = tempdir().unwrap();
        let dice = dir.path().join("dice.txt");
        let words = dir.path().join("words.txt");
        fs::write(&dice, "AB\nCD\n").unwrap();
        fs::write(&words, "AC\n\nDB\nE\n").unwrap();

        let mut out: Vec<u8> = Vec::new();
        let summary = run(&dice, &words, SolverConfig::default(), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0,1: AC\n1,0: DB\nCannot spell E\n"
        );
        assert_eq!(summary, RunSummary { words: 3, spelled: 2 });
        assert_eq!(summary.unspellable(), 1);
    }

    #[test]
    fn test_non_utf8_bytes_in_dice_file_still_spell() {
        let dir = tempdir().unwrap();
        let dice = dir.path().join("dice.txt");
        let words = dir.path().join("words.txt");
        fs::write(&dice, b"AB\n\xe9C\n").unwrap();
        fs::write(&words, "AC\n").unwrap();

        let mut out: Vec<u8> = Vec::new();
        let summary = run(&dice, &words, SolverConfig::default(), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "0,1: AC\n");
        assert_eq!(summary.spelled, 1);
    }

    #[test]
    fn test_unreadable_words_file_produces_no_output() {
        let dir = tempdir().unwrap();
        let dice = dir.path().join("dice.txt");
        fs::write(&dice, "AB\n").unwrap();

        let mut out: Vec<u8> = Vec::new();
        let err = run(&dice, &dir.path().join("missing.txt"), SolverConfig::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, RunError::Input(_)));
        assert!(err.to_string().starts_with("Unable to open words file: "));
        assert!(out.is_empty());
    }

    #[test]
    fn test_dice_file_checked_first() {
        let dir = tempdir().unwrap();
        let err = run(
            &dir.path().join("no-dice.txt"),
            &dir.path().join("no-words.txt"),
            SolverConfig::default(),
            &mut Vec::<u8>::new(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Unable to open dice file: "));
    }
}
