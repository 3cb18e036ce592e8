//! Line-oriented loading of the dice and words files
//!
//! One entry per line. Empty lines are skipped; `\n` and `\r\n` endings are
//! stripped and nothing else is trimmed. Bytes that are not UTF-8 decode to
//! U+FFFD so a file that opens is always processed.

use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::dice::{DiceSet, Die, Word};

/// Which of the two inputs failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Dice,
    Words,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dice => f.write_str("dice"),
            Self::Words => f.write_str("words"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Unable to open {kind} file: {}", .path.display())]
    Unreadable {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// I/O failure after the file opened; decoding never produces this
    #[error("Unable to read {kind} file: {}", .path.display())]
    Read {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl InputError {
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Unreadable { kind, .. } | Self::Read { kind, .. } => *kind,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. } | Self::Read { path, .. } => path,
        }
    }
}

/// Collects the non-empty lines of `reader`, decoding each one lossily
pub fn read_lines<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    let mut number = 0usize;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        number += 1;
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        if buf.is_empty() {
            continue;
        }
        let line = match String::from_utf8_lossy(&buf) {
            Cow::Borrowed(line) => line.to_owned(),
            Cow::Owned(line) => {
                warn!("line {}: invalid UTF-8 replaced with U+FFFD", number);
                line
            }
        };
        lines.push(line);
    }
    Ok(lines)
}

/// Opens `path` and collects its non-empty lines
pub fn load_lines(path: &Path, kind: InputKind) -> Result<Vec<String>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Unreadable {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    let lines = read_lines(BufReader::new(file)).map_err(|source| InputError::Read {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} {} lines from {}", lines.len(), kind, path.display());
    Ok(lines)
}

pub fn load_dice(path: &Path) -> Result<DiceSet, InputError> {
    Ok(load_lines(path, InputKind::Dice)?.into_iter().map(Die::new).collect())
}

pub fn load_words(path: &Path) -> Result<Vec<Word>, InputError> {
    Ok(load_lines(path, InputKind::Words)?.into_iter().map(Word::new).collect())
}
