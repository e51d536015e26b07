//! Letter Boxed Solver
//!
//! Finds the chain of words with the fewest total letters that uses every
//! letter of a Letter Boxed puzzle, where consecutive letters never share a
//! side and each word starts with the last letter of the previous one.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::core::Solution;
//! use letter_boxed::solver::Solver;
//!
//! let words = ["adgjbeh", "hkcfil", "adg"];
//! let solver = Solver::from_sides(&["abc", "def", "ghi", "jkl"], &words).unwrap();
//!
//! let outcome = solver
//!     .solve(2, |better: &Solution| println!("{better}"))
//!     .unwrap();
//! assert_eq!(outcome.best.unwrap().letter_count(), 12);
//! ```

// Core domain types
pub mod core;

// Word indexing and chain search
pub mod solver;

// Dictionary loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod log;
