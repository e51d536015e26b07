//! Legal word index
//!
//! Filters a raw word list down to the words playable on a puzzle and groups
//! them by starting letter.

use crate::core::{ConfigError, LetterSet, Puzzle};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// A word that passed the puzzle's adjacency rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalWord {
    text: String,
    letters: LetterSet,
}

impl LegalWord {
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn first_letter(&self) -> u8 {
        self.text.as_bytes()[0]
    }

    #[inline]
    #[must_use]
    pub fn last_letter(&self) -> u8 {
        self.text.as_bytes()[self.text.len() - 1]
    }
}

/// Legal words of one puzzle, grouped by starting letter
///
/// Words are de-duplicated and ordered by length, then alphabetically. Each
/// per-letter list keeps that order.
#[derive(Debug, Clone, Default)]
pub struct WordIndex {
    words: Vec<LegalWord>,
    by_start: FxHashMap<u8, Vec<usize>>,
}

impl WordIndex {
    /// Build the index for a puzzle
    ///
    /// Entries that are not playable (too short, foreign letters, uppercase,
    /// punctuation, same-side neighbours) are skipped silently.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyWordList` if `words` is empty.
    pub fn build<W: AsRef<str> + Sync>(
        words: &[W],
        puzzle: &Puzzle,
    ) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyWordList);
        }

        let mut legal: Vec<LegalWord> = words
            .par_iter()
            .map(AsRef::as_ref)
            .filter(|word| puzzle.allows(word))
            .filter_map(|word| {
                LetterSet::from_word(word).map(|letters| LegalWord {
                    text: word.to_string(),
                    letters,
                })
            })
            .collect();

        legal.par_sort_unstable_by(|a, b| {
            a.len().cmp(&b.len()).then_with(|| a.text.cmp(&b.text))
        });
        legal.dedup_by(|a, b| a.text == b.text);

        let mut by_start: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (id, word) in legal.iter().enumerate() {
            by_start.entry(word.first_letter()).or_default().push(id);
        }

        debug!(
            "Indexed {} legal words from {} candidates for puzzle {puzzle}",
            legal.len(),
            words.len()
        );

        Ok(Self {
            words: legal,
            by_start,
        })
    }

    /// All legal words in index order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[LegalWord] {
        &self.words
    }

    /// Look up a word by its position in `words()`
    ///
    /// # Panics
    /// Panics if `id` is out of range
    #[inline]
    #[must_use]
    pub fn get(&self, id: usize) -> &LegalWord {
        &self.words[id]
    }

    /// Ids of the legal words starting with `letter`
    ///
    /// Returns an empty slice if no word starts with it.
    #[inline]
    pub fn ids_starting_with(&self, letter: u8) -> &[usize] {
        self.by_start.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Legal words starting with `letter`, in index order
    pub fn starting_with(&self, letter: u8) -> impl Iterator<Item = &LegalWord> {
        self.ids_starting_with(letter)
            .iter()
            .map(move |&id| &self.words[id])
    }

    /// Number of legal words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Build the legal word index straight from raw sides
///
/// # Errors
/// Returns `ConfigError` if the sides are malformed or the word list is empty.
///
/// # Examples
/// ```
/// use letter_boxed::solver::index;
///
/// let words = ["adg", "abd", "gjb", "ad", "Adg"];
/// let index = index(&words, &["abc", "def", "ghi", "jkl"]).unwrap();
///
/// assert_eq!(index.len(), 2);
/// assert_eq!(index.starting_with(b'g').next().unwrap().text(), "gjb");
/// ```
pub fn index<W, S>(words: &[W], sides: &[S]) -> Result<WordIndex, ConfigError>
where
    W: AsRef<str> + Sync,
    S: AsRef<str>,
{
    let puzzle = Puzzle::new(sides)?;
    WordIndex::build(words, &puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::{IndexedRandom, SliceRandom};
    use rand::{Rng, SeedableRng};

    const SIDES: [&str; 4] = ["abc", "def", "ghi", "jkl"];

    #[test]
    fn build_filters_illegal_words() {
        let words = ["adg", "abd", "ad", "adz", "gjb", "ADG", "a-d-g"];
        let index = index(&words, &SIDES).unwrap();

        let texts: Vec<&str> = index.words().iter().map(LegalWord::text).collect();
        assert_eq!(texts, ["adg", "gjb"]);
    }

    #[test]
    fn build_orders_by_length_then_alpha() {
        let words = ["adgjb", "gjb", "adg", "jadg", "dga"];
        let index = index(&words, &SIDES).unwrap();

        let texts: Vec<&str> = index.words().iter().map(LegalWord::text).collect();
        assert_eq!(texts, ["adg", "dga", "gjb", "jadg", "adgjb"]);
    }

    #[test]
    fn build_removes_duplicates() {
        let words = ["adg", "adg", "gjb"];
        let index = index(&words, &SIDES).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn build_groups_by_start_letter() {
        let words = ["adgjb", "adg", "gjb", "dga"];
        let index = index(&words, &SIDES).unwrap();

        let from_a: Vec<&str> = index.starting_with(b'a').map(LegalWord::text).collect();
        assert_eq!(from_a, ["adg", "adgjb"]);
        assert_eq!(index.starting_with(b'z').count(), 0);
        assert!(index.ids_starting_with(b'k').is_empty());
    }

    #[test]
    fn build_rejects_empty_word_list() {
        let words: [&str; 0] = [];
        assert_eq!(
            index(&words, &SIDES).unwrap_err(),
            ConfigError::EmptyWordList
        );
    }

    #[test]
    fn build_rejects_bad_side_before_indexing() {
        let words = ["adg"];
        assert!(matches!(
            index(&words, &["abc", "de", "ghi", "jkl"]),
            Err(ConfigError::SideLength { len: 2, .. })
        ));
    }

    #[test]
    fn no_legal_words_is_not_an_error() {
        let words = ["xyz", "ab"];
        let index = index(&words, &SIDES).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn legal_word_accessors() {
        let index = index(&["jadg"], &SIDES).unwrap();
        let word = index.get(0);
        assert_eq!(word.first_letter(), b'j');
        assert_eq!(word.last_letter(), b'g');
        assert_eq!(word.letters().to_string(), "adgj");
        assert_eq!(word.len(), 4);
    }

    fn random_puzzle(rng: &mut StdRng) -> Vec<String> {
        let mut alphabet: Vec<u8> = (b'a'..=b'z').collect();
        alphabet.shuffle(rng);
        alphabet
            .chunks(3)
            .take(4)
            .map(|side| String::from_utf8_lossy(side).into_owned())
            .collect()
    }

    fn random_word(rng: &mut StdRng) -> String {
        let len = rng.random_range(1..9);
        (0..len)
            .map(|_| char::from(rng.random_range(b'a'..=b'z')))
            .collect()
    }

    #[test]
    fn legal_words_never_have_same_side_neighbours() {
        let mut rng = StdRng::seed_from_u64(0x1e77e2);

        for _ in 0..50 {
            let sides = random_puzzle(&mut rng);
            let puzzle = Puzzle::new(&sides).unwrap();

            // Bias towards puzzle letters so some words survive
            let letters: Vec<u8> = puzzle.alphabet().iter().collect();
            let mut words: Vec<String> = (0..500)
                .map(|_| {
                    let len = rng.random_range(2..8);
                    (0..len)
                        .map(|_| char::from(*letters.choose(&mut rng).unwrap()))
                        .collect()
                })
                .collect();
            words.extend((0..100).map(|_| random_word(&mut rng)));

            let index = WordIndex::build(&words, &puzzle).unwrap();
            for word in index.words() {
                assert!(word.len() >= 3, "{} is too short", word.text());
                for pair in word.text().as_bytes().windows(2) {
                    let first = puzzle.side_of(pair[0]).unwrap();
                    let second = puzzle.side_of(pair[1]).unwrap();
                    assert_ne!(first, second, "{} breaks adjacency", word.text());
                }
                assert!(puzzle.alphabet().is_superset(word.letters()));
            }
        }
    }
}
