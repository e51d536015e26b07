//! Letter Boxed puzzle representation
//!
//! A puzzle is an ordered list of sides, each holding 3 distinct letters. No
//! letter may appear on more than one side.

use super::error::ConfigError;
use super::letters::LetterSet;
use std::fmt;

/// Number of letters on every side
pub const SIDE_LEN: usize = 3;

/// Shortest word the puzzle accepts
pub const MIN_WORD_LEN: usize = 3;

/// A validated Letter Boxed puzzle
///
/// Keeps a letter-to-side lookup so the adjacency rule is a table lookup per letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    sides: Vec<[u8; SIDE_LEN]>,
    side_of: [Option<usize>; 26],
    alphabet: LetterSet,
}

impl Puzzle {
    /// Create a puzzle from its sides
    ///
    /// Side letters are lowercased before validation.
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - No sides are given
    /// - A side does not have exactly 3 letters
    /// - A side contains a non-letter character
    /// - A letter is repeated within or across sides
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{ConfigError, Puzzle};
    ///
    /// let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
    /// assert_eq!(puzzle.alphabet().len(), 12);
    ///
    /// assert!(matches!(
    ///     Puzzle::new(&["ab", "def", "ghi", "jkl"]),
    ///     Err(ConfigError::SideLength { len: 2, .. })
    /// ));
    /// ```
    pub fn new<S: AsRef<str>>(sides: &[S]) -> Result<Self, ConfigError> {
        if sides.is_empty() {
            return Err(ConfigError::NoSides);
        }

        let mut parsed = Vec::with_capacity(sides.len());
        let mut side_of = [None; 26];
        let mut alphabet = LetterSet::new();

        for (index, side) in sides.iter().enumerate() {
            let text = side.as_ref().trim().to_lowercase();

            let len = text.chars().count();
            if len != SIDE_LEN {
                return Err(ConfigError::SideLength { side: text, len });
            }

            if let Some(letter) = text.chars().find(|c| !c.is_ascii_lowercase()) {
                return Err(ConfigError::InvalidLetter { side: text, letter });
            }

            let mut letters = [0u8; SIDE_LEN];
            for (slot, letter) in letters.iter_mut().zip(text.bytes()) {
                if alphabet.contains(letter) {
                    return Err(ConfigError::DuplicateLetter(char::from(letter)));
                }
                alphabet.insert(letter);
                side_of[usize::from(letter - b'a')] = Some(index);
                *slot = letter;
            }
            parsed.push(letters);
        }

        Ok(Self {
            sides: parsed,
            side_of,
            alphabet,
        })
    }

    /// All letters in the puzzle
    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> LetterSet {
        self.alphabet
    }

    /// The sides in the order they were given
    #[inline]
    #[must_use]
    pub fn sides(&self) -> &[[u8; SIDE_LEN]] {
        &self.sides
    }

    /// Index of the side holding `letter`, or `None` if it is not in the puzzle
    #[inline]
    #[must_use]
    pub fn side_of(&self, letter: u8) -> Option<usize> {
        if letter.is_ascii_lowercase() {
            self.side_of[usize::from(letter - b'a')]
        } else {
            None
        }
    }

    /// Check if a word can be played on this puzzle
    ///
    /// A playable word has at least 3 letters, uses only puzzle letters, and
    /// never puts two consecutive letters from the same side.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Puzzle;
    ///
    /// let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
    /// assert!(puzzle.allows("adg"));
    /// assert!(!puzzle.allows("abd")); // a and b share a side
    /// assert!(!puzzle.allows("ad"));  // too short
    /// assert!(!puzzle.allows("adz")); // z is not in the puzzle
    /// ```
    #[must_use]
    pub fn allows(&self, word: &str) -> bool {
        if word.len() < MIN_WORD_LEN {
            return false;
        }

        let mut previous: Option<usize> = None;
        for letter in word.bytes() {
            let Some(side) = self.side_of(letter) else {
                return false;
            };
            if previous == Some(side) {
                return false;
            }
            previous = Some(side);
        }

        true
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, side) in self.sides.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            for &letter in side {
                write!(f, "{}", char::from(letter))?;
            }
        }
        Ok(())
    }
}
