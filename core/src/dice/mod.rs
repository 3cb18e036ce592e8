//! Letter dice and the words spelled with them
//!
//! A [`Die`] is a bag of letters, a [`Word`] an ordered run of letter
//! positions. Each position must be covered by its own die; whether that is
//! possible is a bipartite matching question answered by [`WordSolver`].

pub mod builder;
pub mod report;
pub mod solver;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::builder::{FlowNetworkBuilder, NetworkLayout};
pub use self::report::SpellOutcome;
pub use self::solver::{WordSolution, WordSolver};

/// One letter die: the letters printed on its faces
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Die {
    letters: String,
}

impl Die {
    pub fn new(letters: impl Into<String>) -> Self {
        Self {
            letters: letters.into(),
        }
    }

    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Case-sensitive membership; repeated faces make no difference
    #[inline]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(letter)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.letters)
    }
}

impl From<&str> for Die {
    fn from(letters: &str) -> Self {
        Self::new(letters)
    }
}

/// A word to spell; every character is a separate position
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let letters = text.chars().collect();
        Self { text, letters }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letter positions
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.text
    }
}

/// The dice available to every word, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    pub fn new(dice: Vec<Die>) -> Self {
        Self { dice }
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Die> {
        self.dice.iter()
    }

    pub fn as_slice(&self) -> &[Die] {
        &self.dice
    }
}

impl<D: Into<Die>> FromIterator<D> for DiceSet {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a DiceSet {
    type Item = &'a Die;
    type IntoIter = std::slice::Iter<'a, Die>;

    fn into_iter(self) -> Self::IntoIter {
        self.dice.iter()
    }
}
