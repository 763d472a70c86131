//! DescendingSearch — binary search over descending-sorted integer sequences.
//!
//! Locates query values in a sequence ordered from largest to smallest,
//! reporting the zero-based index of a match or `-1` when the value is absent.

pub mod cli;
pub mod engine;
pub mod format;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{find, is_descending, search, search_all, QueryOutcome, QueryReport};
pub use format::{InputReader, ResultWriter};
pub use types::{SearchError, SearchInput, SearchResult, DEFAULT_INPUT_PATH, NOT_FOUND};
