//! worddice: for each word, report which die spells each letter.
//!
//! ```text
//! worddice <DICE_FILE> <WORDS_FILE>
//! ```
//!
//! Logging goes to standard error, filtered by `RUST_LOG` (default `warn`).

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use worddice_core::{run, RunError, SolverConfig};

#[derive(Parser, Debug)]
#[command(name = "worddice", version, about = "Assign letter dice to word positions via maximum flow")]
struct Cli {
    /// Dice file, one die's letters per line
    dice: PathBuf,
    /// Words file, one word per line
    words: PathBuf,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = match SolverConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&cli.dice, &cli.words, config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(RunError::Input(e)) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e @ (RunError::Flow(_) | RunError::Output(_))) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
