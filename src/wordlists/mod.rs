//! Word lists for Letter Boxed solving
//!
//! Dictionaries are plain text with whitespace separated words.

pub mod loader;

pub use loader::{load_from_file, words_from_str};
