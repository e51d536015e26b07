//! Word chains and solutions
//!
//! A chain is a sequence of words where each word starts with the letter the
//! previous word ended on. The shared boundary letter is counted once.

use super::letters::LetterSet;
use std::fmt;

/// Total letters in a chain, counting each boundary letter once
///
/// `len(w1) + sum(len(wi) - 1)` for the remaining words; 0 for an empty chain.
///
/// # Examples
/// ```
/// use letter_boxed::core::total_letter_count;
///
/// assert_eq!(total_letter_count(&["adgjbeh", "hkcfil"]), 12);
/// assert_eq!(total_letter_count::<&str>(&[]), 0);
/// ```
#[must_use]
pub fn total_letter_count<S: AsRef<str>>(words: &[S]) -> usize {
    if words.is_empty() {
        return 0;
    }
    let sum: usize = words.iter().map(|w| w.as_ref().len()).sum();
    (sum + 1).saturating_sub(words.len())
}

/// One word of a chain along with the chain totals after it
#[derive(Debug, Clone, Copy)]
struct Link<'a> {
    word: &'a str,
    covered: LetterSet,
    letters: usize,
}

/// Chain state during exploration
///
/// Each link stores the cumulative coverage and letter count, so `pop` restores
/// the previous state without recomputation.
#[derive(Debug, Clone, Default)]
pub struct Chain<'a> {
    links: Vec<Link<'a>>,
}

impl<'a> Chain<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Number of words in the chain
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Distinct letters covered so far
    #[inline]
    #[must_use]
    pub fn covered(&self) -> LetterSet {
        self.links.last().map_or(LetterSet::EMPTY, |link| link.covered)
    }

    /// Running total letter count
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.links.last().map_or(0, |link| link.letters)
    }

    /// Last letter of the last word, which the next word must start with
    #[must_use]
    pub fn last_letter(&self) -> Option<u8> {
        self.links
            .last()
            .and_then(|link| link.word.as_bytes().last().copied())
    }

    /// Letter count the chain would have after appending a word of `word_len` letters
    #[inline]
    #[must_use]
    pub fn count_with(&self, word_len: usize) -> usize {
        if self.is_empty() {
            word_len
        } else {
            self.letter_count() + word_len.saturating_sub(1)
        }
    }

    /// Append a word whose distinct letters are `letters`
    ///
    /// The caller is responsible for the word starting with `last_letter()`.
    pub fn push(&mut self, word: &'a str, letters: LetterSet) {
        let link = Link {
            word,
            covered: self.covered().union(letters),
            letters: self.count_with(word.len()),
        };
        self.links.push(link);
    }

    /// Remove the last word
    pub fn pop(&mut self) -> Option<&'a str> {
        self.links.pop().map(|link| link.word)
    }

    /// The words in order
    pub fn words(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.links.iter().map(|link| link.word)
    }

    /// Snapshot the chain as an owned solution
    #[must_use]
    pub fn to_solution(&self) -> Solution {
        Solution {
            words: self.words().map(str::to_string).collect(),
            letter_count: self.letter_count(),
        }
    }
}

/// A completed chain covering the whole puzzle alphabet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    words: Vec<String>,
    letter_count: usize,
}

impl Solution {
    /// Create a solution from its words, computing the letter count
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let letter_count = total_letter_count(&words);
        Self {
            words,
            letter_count,
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Total letter count with boundary letters counted once
    #[inline]
    #[must_use]
    pub const fn letter_count(&self) -> usize {
        self.letter_count
    }

    /// Distinct letters used by the solution
    #[must_use]
    pub fn covered(&self) -> LetterSet {
        self.words
            .iter()
            .flat_map(|w| w.bytes())
            .collect::<LetterSet>()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} letters)",
            self.words.join(" -> "),
            self.letter_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> LetterSet {
        LetterSet::from_word(word).unwrap()
    }

    #[test]
    fn total_letter_count_two_words() {
        assert_eq!(total_letter_count(&["bake", "echo"]), 7);
        assert_eq!(total_letter_count(&["adgjbeh", "hkcfil"]), 12);
    }

    #[test]
    fn total_letter_count_single_and_empty() {
        assert_eq!(total_letter_count(&["word"]), 4);
        assert_eq!(total_letter_count::<String>(&[]), 0);
    }

    #[test]
    fn chain_tracks_running_totals() {
        let mut chain = Chain::new();
        assert_eq!(chain.letter_count(), 0);
        assert_eq!(chain.last_letter(), None);

        chain.push("adgjbeh", letters("adgjbeh"));
        assert_eq!(chain.letter_count(), 7);
        assert_eq!(chain.last_letter(), Some(b'h'));

        chain.push("hkcfil", letters("hkcfil"));
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.letter_count(), 12);
        assert_eq!(chain.covered().to_string(), "abcdefghijkl");
    }

    #[test]
    fn chain_pop_restores_previous_state() {
        let mut chain = Chain::new();
        chain.push("adg", letters("adg"));
        let covered = chain.covered();

        chain.push("gjb", letters("gjb"));
        assert_eq!(chain.pop(), Some("gjb"));

        assert_eq!(chain.covered(), covered);
        assert_eq!(chain.letter_count(), 3);
        assert_eq!(chain.pop(), Some("adg"));
        assert_eq!(chain.pop(), None);
    }

    #[test]
    fn count_with_accounts_for_boundary() {
        let mut chain = Chain::new();
        assert_eq!(chain.count_with(5), 5);
        chain.push("adg", letters("adg"));
        assert_eq!(chain.count_with(5), 7);
    }

    #[test]
    fn to_solution_snapshot() {
        let mut chain = Chain::new();
        chain.push("adgjbeh", letters("adgjbeh"));
        chain.push("hkcfil", letters("hkcfil"));

        let solution = chain.to_solution();
        assert_eq!(solution.words(), ["adgjbeh", "hkcfil"]);
        assert_eq!(solution.letter_count(), 12);
        assert_eq!(solution, Solution::new(vec!["adgjbeh".into(), "hkcfil".into()]));
    }

    #[test]
    fn solution_display() {
        let solution = Solution::new(vec!["adgjbeh".into(), "hkcfil".into()]);
        assert_eq!(solution.to_string(), "adgjbeh -> hkcfil (12 letters)");
        assert_eq!(solution.covered().len(), 12);
    }
}
