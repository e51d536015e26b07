//! Letter set representation
//!
//! A `LetterSet` is a bitmask over the lowercase ASCII alphabet, used for puzzle
//! alphabets and chain coverage.

use std::fmt;

/// A set of lowercase ASCII letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Build a set from the letters of a word
    ///
    /// Returns `None` if the word contains anything other than `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("hello").unwrap();
    /// assert_eq!(set.len(), 4);
    /// assert!(LetterSet::from_word("Hello").is_none());
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let mut set = Self::EMPTY;
        for byte in word.bytes() {
            if !byte.is_ascii_lowercase() {
                return None;
            }
            set.insert(byte);
        }
        Some(set)
    }

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    /// Add a letter to the set
    ///
    /// Letters outside `a..=z` are ignored.
    #[inline]
    pub fn insert(&mut self, letter: u8) {
        if letter.is_ascii_lowercase() {
            self.0 |= Self::bit(letter);
        }
    }

    /// Check if the set contains a letter
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    /// Letters in either set
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters in `self` but not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Check if every letter of `other` is in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_word_collects_distinct_letters() {
        let set = LetterSet::from_word("banana").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(b'b'));
        assert!(set.contains(b'a'));
        assert!(set.contains(b'n'));
        assert!(!set.contains(b'z'));
    }

    #[test]
    fn from_word_rejects_non_lowercase() {
        assert!(LetterSet::from_word("Apple").is_none());
        assert!(LetterSet::from_word("can't").is_none());
        assert!(LetterSet::from_word("caf\u{e9}").is_none());
    }

    #[test]
    fn empty_word_gives_empty_set() {
        let set = LetterSet::from_word("").unwrap();
        assert!(set.is_empty());
        assert_eq!(set, LetterSet::EMPTY);
    }

    #[test]
    fn set_operations() {
        let abc = LetterSet::from_word("abc").unwrap();
        let cde = LetterSet::from_word("cde").unwrap();

        assert_eq!(abc.union(cde).to_string(), "abcde");
        assert_eq!(abc.difference(cde).to_string(), "ab");
        assert!(abc.union(cde).is_superset(abc));
        assert!(!abc.is_superset(cde));
        assert!(abc.is_superset(LetterSet::EMPTY));
    }

    #[test]
    fn insert_ignores_non_letters() {
        let mut set = LetterSet::new();
        set.insert(b'A');
        set.insert(b'-');
        assert!(set.is_empty());
        assert!(!set.contains(b'A'));
    }

    #[test]
    fn iter_is_alphabetical() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        let letters: Vec<u8> = set.iter().collect();
        assert_eq!(letters, b"aberz");
    }
}
