//! Word list loading utilities
//!
//! Reads a dictionary as a whole, lowercases it and splits it on whitespace.
//! Entries are kept even if they are not playable; the solver's index filters
//! them per puzzle.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns the distinct lowercased words in alphabetical order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_boxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_str(&content);
    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Split dictionary text into distinct lowercased words
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::loader::words_from_str;
///
/// let words = words_from_str("Bake echo\nbake\n\n  ECHO face");
/// assert_eq!(words, ["bake", "echo", "face"]);
/// ```
#[must_use]
pub fn words_from_str(content: &str) -> Vec<String> {
    let mut words: Vec<String> = content
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}
