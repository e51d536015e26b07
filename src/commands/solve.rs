//! Puzzle solving command
//!
//! Runs the chain search with a spinner and prints each improved solution as
//! it is found.

use crate::core::Solution;
use crate::output::formatters::format_solution;
use crate::solver::{SearchStats, Solver};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Default word-count ceiling
pub const DEFAULT_MAX_WORDS: usize = 2;

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub max_words: usize,
    pub show_progress: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
            show_progress: true,
        }
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub puzzle: String,
    pub max_words: usize,
    pub legal_words: usize,
    /// Every reported solution, worst first; the last one is the best
    pub improvements: Vec<Solution>,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    /// The best solution found, if any
    #[must_use]
    pub fn best(&self) -> Option<&Solution> {
        self.improvements.last()
    }
}

fn spinner(show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Searching...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Solve the solver's puzzle with at most `config.max_words` words
///
/// Each improved solution is printed to stdout as it is found.
///
/// # Errors
///
/// Returns an error if `config.max_words` is 0 (`ConfigError::ZeroMaxWords`)
/// or if a progress line cannot be written.
pub fn solve_puzzle(config: &SolveConfig, solver: &Solver) -> Result<SolveResult> {
    solve_puzzle_to(config, solver, &mut io::stdout())
}

/// Like [`solve_puzzle`], writing the improvement lines to `out`
///
/// Lines are written with the spinner suspended, so they are emitted even
/// when the spinner itself is hidden (stderr not a terminal). Nothing is
/// written unless `config.show_progress` is set.
///
/// # Errors
///
/// Returns an error if `config.max_words` is 0 (`ConfigError::ZeroMaxWords`)
/// or if writing to `out` fails.
pub fn solve_puzzle_to<W: Write>(
    config: &SolveConfig,
    solver: &Solver,
    out: &mut W,
) -> Result<SolveResult> {
    let pb = spinner(config.show_progress);
    let mut improvements: Vec<Solution> = Vec::new();
    let mut write_error: Option<io::Error> = None;
    let start = Instant::now();

    let outcome = solver.solve(config.max_words, |solution: &Solution| {
        if config.show_progress && write_error.is_none() {
            write_error = pb
                .suspend(|| writeln!(out, "{}", format_solution(solution)))
                .err();
        }
        pb.set_message(format!("Best: {} letters", solution.letter_count()));
        improvements.push(solution.clone());
    });
    pb.finish_and_clear();
    let outcome = outcome?;

    if let Some(e) = write_error {
        return Err(e).context("Failed to write search progress");
    }

    debug_assert_eq!(improvements.last(), outcome.best.as_ref());

    Ok(SolveResult {
        puzzle: solver.puzzle().to_string(),
        max_words: config.max_words,
        legal_words: solver.index().len(),
        improvements,
        stats: outcome.stats,
        duration: start.elapsed(),
    })
}
