//! Main Letter Boxed solver interface

use super::index::WordIndex;
use super::search::{ProgressSink, SearchOutcome, search};
use crate::core::{ConfigError, Puzzle};

/// Main Letter Boxed solver
///
/// Owns a validated puzzle and its legal word index, built once and reused
/// for every search.
#[derive(Debug, Clone)]
pub struct Solver {
    puzzle: Puzzle,
    index: WordIndex,
}

impl Solver {
    /// Create a solver for a puzzle from a raw word list
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` if `words` is empty.
    pub fn new<W: AsRef<str> + Sync>(puzzle: Puzzle, words: &[W]) -> Result<Self, ConfigError> {
        let index = WordIndex::build(words, &puzzle)?;
        Ok(Self { puzzle, index })
    }

    /// Create a solver straight from raw sides
    ///
    /// # Errors
    /// Returns `ConfigError` if the sides are malformed or `words` is empty.
    pub fn from_sides<W, S>(sides: &[S], words: &[W]) -> Result<Self, ConfigError>
    where
        W: AsRef<str> + Sync,
        S: AsRef<str>,
    {
        Self::new(Puzzle::new(sides)?, words)
    }

    #[inline]
    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &WordIndex {
        &self.index
    }

    /// Find the shortest covering chain of at most `max_words` words
    ///
    /// Each strictly better solution is passed to `sink` as it is found.
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroMaxWords` if `max_words` is 0.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Solution;
    /// use letter_boxed::solver::Solver;
    ///
    /// let words = ["adgjbeh", "hkcfil", "adg"];
    /// let solver = Solver::from_sides(&["abc", "def", "ghi", "jkl"], &words).unwrap();
    ///
    /// let outcome = solver.solve(2, |_: &Solution| {}).unwrap();
    /// assert_eq!(outcome.best.unwrap().letter_count(), 12);
    /// ```
    pub fn solve<S: ProgressSink>(
        &self,
        max_words: usize,
        sink: S,
    ) -> Result<SearchOutcome, ConfigError> {
        if max_words == 0 {
            return Err(ConfigError::ZeroMaxWords);
        }
        Ok(search(&self.index, self.puzzle.alphabet(), max_words, sink))
    }
}
