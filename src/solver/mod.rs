//! Letter Boxed solving
//!
//! Legal word indexing and the branch-and-bound chain search.

mod engine;
pub mod index;
pub mod search;

pub use engine::Solver;
pub use index::{LegalWord, WordIndex, index};
pub use search::{ProgressSink, SearchOutcome, SearchStats, search};
