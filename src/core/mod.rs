//! Core domain types for Letter Boxed
//!
//! Puzzle validation, letter sets and chain bookkeeping. Nothing here performs I/O.

mod chain;
mod error;
mod letters;
mod puzzle;

pub use chain::{Chain, Solution, total_letter_count};
pub use error::ConfigError;
pub use letters::LetterSet;
pub use puzzle::{MIN_WORD_LEN, Puzzle, SIDE_LEN};
