//! Per-word outcome and its output line

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result of asking whether a word can be spelled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SpellOutcome {
    /// `dice[j]` is the die index used for letter position `j`
    Spelled { word: String, dice: Vec<usize> },
    Unspellable { word: String },
}

impl SpellOutcome {
    pub fn word(&self) -> &str {
        match self {
            Self::Spelled { word, .. } | Self::Unspellable { word } => word,
        }
    }

    pub fn is_spelled(&self) -> bool {
        matches!(self, Self::Spelled { .. })
    }

    /// Die indices per position, when spelled
    pub fn assignment(&self) -> Option<&[usize]> {
        match self {
            Self::Spelled { dice, .. } => Some(dice),
            Self::Unspellable { .. } => None,
        }
    }
}

/// Formats as `0,2,1: cat` or `Cannot spell cat`
impl fmt::Display for SpellOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spelled { word, dice } => {
                for (j, die) in dice.iter().enumerate() {
                    if j > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", die)?;
                }
                write!(f, ": {}", word)
            }
            Self::Unspellable { word } => write!(f, "Cannot spell {}", word),
        }
    }
}
