//! Puzzle analysis command
//!
//! Summarises the legal words available for a puzzle.

use crate::solver::{LegalWord, Solver};

/// Result of analyzing a puzzle's legal words
pub struct AnalysisResult {
    pub puzzle: String,
    pub candidate_words: usize,
    pub legal_words: usize,
    /// Legal word count per puzzle letter, in side order
    pub by_start: Vec<(char, usize)>,
    pub longest: Option<String>,
    /// Legal word covering the most distinct letters, with that count
    pub widest: Option<(String, usize)>,
    /// Legal words starting with the requested letter
    pub listed: Option<(char, Vec<String>)>,
}

/// Analyze the legal words of the solver's puzzle
///
/// When `letter` is given, also lists every legal word starting with it.
#[must_use]
pub fn analyze_puzzle(
    solver: &Solver,
    candidate_words: usize,
    letter: Option<char>,
) -> AnalysisResult {
    let index = solver.index();
    let puzzle = solver.puzzle();

    let by_start = puzzle
        .sides()
        .iter()
        .flatten()
        .map(|&letter| (char::from(letter), index.starting_with(letter).count()))
        .collect();

    // Index order is by length, so the last word is a longest one
    let longest = index.words().last().map(|w| w.text().to_string());

    let widest = index
        .words()
        .iter()
        .rev()
        .max_by_key(|w| w.letters().len())
        .map(|w| (w.text().to_string(), w.letters().len()));

    let listed = letter.map(|c| {
        let c = c.to_ascii_lowercase();
        let words: Vec<String> = u8::try_from(c)
            .map(|byte| {
                index
                    .starting_with(byte)
                    .map(LegalWord::text)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        (c, words)
    });

    AnalysisResult {
        puzzle: puzzle.to_string(),
        candidate_words,
        legal_words: index.len(),
        by_start,
        longest,
        widest,
        listed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_solver() -> (Solver, usize) {
        let words = ["adg", "gjb", "adgjbeh", "jadgb", "bad", "zzz", "hkcfil"];
        (
            Solver::from_sides(&["abc", "def", "ghi", "jkl"], &words).unwrap(),
            words.len(),
        )
    }

    #[test]
    fn analyze_counts_words() {
        let (solver, total) = setup_solver();
        let result = analyze_puzzle(&solver, total, None);

        assert_eq!(result.puzzle, "abc def ghi jkl");
        assert_eq!(result.candidate_words, 7);
        assert_eq!(result.legal_words, 5);
        assert!(result.listed.is_none());
    }

    #[test]
    fn analyze_counts_by_start_letter() {
        let (solver, total) = setup_solver();
        let result = analyze_puzzle(&solver, total, None);

        assert_eq!(result.by_start.len(), 12);
        assert_eq!(result.by_start[0], ('a', 2));
        assert_eq!(result.by_start[6], ('g', 1));
        assert_eq!(result.by_start[1], ('b', 0));

        let sum: usize = result.by_start.iter().map(|&(_, n)| n).sum();
        assert_eq!(sum, result.legal_words);
    }

    #[test]
    fn analyze_longest_and_widest() {
        let (solver, total) = setup_solver();
        let result = analyze_puzzle(&solver, total, None);

        assert_eq!(result.longest.as_deref(), Some("adgjbeh"));
        assert_eq!(result.widest, Some(("adgjbeh".to_string(), 7)));
    }

    #[test]
    fn analyze_lists_words_for_letter() {
        let (solver, total) = setup_solver();
        let result = analyze_puzzle(&solver, total, Some('A'));

        let (letter, words) = result.listed.unwrap();
        assert_eq!(letter, 'a');
        assert_eq!(words, ["adg", "adgjbeh"]);
    }

    #[test]
    fn analyze_lists_nothing_for_foreign_letter() {
        let (solver, total) = setup_solver();
        let result = analyze_puzzle(&solver, total, Some('\u{e9}'));

        let (_, words) = result.listed.unwrap();
        assert!(words.is_empty());
    }
}
