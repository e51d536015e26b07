//! Configuration errors
//!
//! Every failure the solver can report is a configuration problem detected
//! before any search begins. "No solution" is not an error.

use std::fmt;

/// Error type for malformed puzzle input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No sides were supplied
    NoSides,
    /// A side does not have exactly 3 letters
    SideLength { side: String, len: usize },
    /// A side contains something other than an ASCII letter
    InvalidLetter { side: String, letter: char },
    /// A letter appears more than once across the puzzle
    DuplicateLetter(char),
    /// The candidate word list is empty
    EmptyWordList,
    /// The word-count ceiling is zero
    ZeroMaxWords,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSides => write!(f, "Puzzle must have at least one side"),
            Self::SideLength { side, len } => {
                write!(f, "Side '{side}' must have exactly 3 letters, got {len}")
            }
            Self::InvalidLetter { side, letter } => {
                write!(f, "Side '{side}' contains invalid character '{letter}'")
            }
            Self::DuplicateLetter(letter) => {
                write!(f, "Letter '{letter}' appears more than once in the puzzle")
            }
            Self::EmptyWordList => write!(f, "Word list is empty"),
            Self::ZeroMaxWords => write!(f, "Maximum word count must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
