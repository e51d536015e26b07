//! Chain search engine
//!
//! Depth-first branch-and-bound over chains of legal words. The search keeps
//! an explicit frame stack instead of recursing, owns its best-so-far value,
//! and reports every strictly better solution to a caller-supplied sink.
//!
//! Pruning:
//! - A candidate that adds no new letter to the chain is skipped. A solution
//!   that only reaches its minimum by revisiting covered letters is missed;
//!   this trades completeness for a much smaller search space.
//! - A candidate whose running letter count reaches the best total is skipped,
//!   along with the rest of its pool, since pools are ordered by length.
//! - A solution as long as the alphabet cannot be beaten, so the search stops.

use super::index::WordIndex;
use crate::core::{Chain, LetterSet, Solution};
use log::{debug, trace};

/// Receives each strictly better solution as the search finds it
pub trait ProgressSink {
    fn improved(&mut self, solution: &Solution);
}

impl<F: FnMut(&Solution)> ProgressSink for F {
    fn improved(&mut self, solution: &Solution) {
        self(solution);
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Chains extended by one word
    pub chains_explored: usize,
    /// Candidates skipped for adding no new letters
    pub pruned_no_new_letters: usize,
    /// Candidates skipped because they could not beat the best total
    ///
    /// Counts the whole remaining pool once the cut-off fires, including tail
    /// words that would otherwise have been skipped for adding no new letters.
    pub pruned_by_bound: usize,
    /// Strictly better solutions reported to the sink
    pub solutions_reported: usize,
    /// Search ended early on a solution as short as the alphabet
    pub stopped_at_lower_bound: bool,
}

/// Result of a search: the best solution, if any, plus statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best: Option<Solution>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    #[inline]
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.best.is_some()
    }
}

/// Candidates for the next word at one depth
struct Frame<'a> {
    pool: &'a [usize],
    next: usize,
}

impl<'a> Frame<'a> {
    const fn new(pool: &'a [usize]) -> Self {
        Self { pool, next: 0 }
    }
}

/// Find the chain of at most `max_words` words covering `alphabet` with the
/// fewest total letters
///
/// First words are tried in index order (length, then alphabetical); among
/// equally short solutions the first one found wins. `sink` sees every
/// solution that beats all earlier ones, so reported letter counts strictly
/// decrease. A `max_words` of 0 finds nothing.
///
/// # Examples
/// ```
/// use letter_boxed::core::{Puzzle, Solution};
/// use letter_boxed::solver::{WordIndex, search};
///
/// let puzzle = Puzzle::new(&["abc", "def", "ghi", "jkl"]).unwrap();
/// let index = WordIndex::build(&["adgjbeh", "hkcfil"], &puzzle).unwrap();
///
/// let mut reported = Vec::new();
/// let outcome = search(&index, puzzle.alphabet(), 2, |s: &Solution| reported.push(s.clone()));
///
/// let best = outcome.best.unwrap();
/// assert_eq!(best.to_string(), "adgjbeh -> hkcfil (12 letters)");
/// assert_eq!(reported, [best]);
/// ```
pub fn search<S: ProgressSink>(
    index: &WordIndex,
    alphabet: LetterSet,
    max_words: usize,
    mut sink: S,
) -> SearchOutcome {
    let mut stats = SearchStats::default();
    let mut best: Option<Solution> = None;
    let mut bound = usize::MAX;

    if max_words == 0 || index.is_empty() {
        return SearchOutcome { best, stats };
    }

    let roots: Vec<usize> = (0..index.len()).collect();
    let mut chain = Chain::new();
    let mut frames = vec![Frame::new(&roots)];

    // Invariant: frames.len() == chain.len() + 1
    'search: while let Some(frame) = frames.last_mut() {
        let Some(&id) = frame.pool.get(frame.next) else {
            frames.pop();
            chain.pop();
            continue;
        };
        frame.next += 1;

        let word = index.get(id);
        if word.letters().difference(chain.covered()).is_empty() {
            stats.pruned_no_new_letters += 1;
            continue;
        }

        let count = chain.count_with(word.len());
        if count >= bound {
            // Every later word in this pool is at least as long
            stats.pruned_by_bound += frame.pool.len() - frame.next + 1;
            frame.next = frame.pool.len();
            continue;
        }

        chain.push(word.text(), word.letters());
        stats.chains_explored += 1;

        if chain.covered().is_superset(alphabet) {
            let solution = chain.to_solution();
            debug!("Improved solution: {solution}");
            bound = count;
            stats.solutions_reported += 1;
            sink.improved(&solution);
            best = Some(solution);
            chain.pop();

            if bound <= alphabet.len() {
                stats.stopped_at_lower_bound = true;
                break 'search;
            }
            continue;
        }

        if chain.len() < max_words {
            trace!("Extending chain ending in '{}'", char::from(word.last_letter()));
            frames.push(Frame::new(index.ids_starting_with(word.last_letter())));
        } else {
            chain.pop();
        }
    }

    debug!("Search finished: {stats:?}");
    SearchOutcome { best, stats }
}
