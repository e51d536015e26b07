//! Formatting utilities for terminal output

use crate::core::Solution;

/// Format a solution as `word -> word (N letters)`
#[must_use]
pub fn format_solution(solution: &Solution) -> String {
    format!(
        "{} ({} letters)",
        format_chain(solution.words()),
        solution.letter_count()
    )
}

/// Join chain words with arrows
#[must_use]
pub fn format_chain<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" -> ")
}

/// Format puzzle sides as `ABC | DEF | GHI | JKL`
#[must_use]
pub fn format_sides(puzzle: &str) -> String {
    puzzle
        .split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = (value * width)
        .checked_div(max)
        .map_or(0, |filled| filled.min(width));

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_solution_matches_display() {
        let solution = Solution::new(vec!["adgjbeh".to_string(), "hkcfil".to_string()]);
        assert_eq!(format_solution(&solution), "adgjbeh -> hkcfil (12 letters)");
        assert_eq!(format_solution(&solution), solution.to_string());
    }

    #[test]
    fn format_chain_single_word() {
        assert_eq!(format_chain(&["word"]), "word");
        assert_eq!(format_chain::<&str>(&[]), "");
    }

    #[test]
    fn format_sides_uppercases() {
        assert_eq!(format_sides("abc def ghi jkl"), "ABC | DEF | GHI | JKL");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0, 100, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100, 100, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50, 100, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5, 0, 4), "░░░░");
    }
}
