//! Error types for the DescendingSearch library.

use thiserror::Error;

/// All errors that can occur while reading input or rendering results.
///
/// The search itself is total and never fails; absence is reported
/// through [`NOT_FOUND`](crate::types::NOT_FOUND).
#[derive(Error, Debug)]
pub enum SearchError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required input line is absent (1-based line number).
    #[error("Input is missing line {0}")]
    MissingLine(usize),

    /// A token could not be parsed as a 64-bit signed integer.
    #[error("Invalid integer {token:?} on line {line}")]
    InvalidInteger { line: usize, token: String },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for DescendingSearch operations.
pub type SearchResult<T> = Result<T, SearchError>;
