//! Data types shared by the search engine, the input parser and the CLI.

pub mod error;
pub mod input;

pub use error::{SearchError, SearchResult};
pub use input::SearchInput;

/// Index reported for a query value that does not occur in the sequence.
pub const NOT_FOUND: i64 = -1;

/// Input file read when the CLI is run without an explicit path.
pub const DEFAULT_INPUT_PATH: &str = "data/dataset/input.txt";
