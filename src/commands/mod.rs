//! Command implementations

pub mod analyze;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_puzzle};
pub use solve::{DEFAULT_MAX_WORDS, SolveConfig, SolveResult, solve_puzzle, solve_puzzle_to};
