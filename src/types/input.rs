//! Parsed input: one sequence, many queries.

/// A descending-sorted sequence together with the values to look up in it.
///
/// The ordering of `sequence` is the caller's responsibility; nothing here
/// checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    /// Values in descending order.
    pub sequence: Vec<i64>,
    /// Targets, answered in this order.
    pub queries: Vec<i64>,
}

impl SearchInput {
    /// Create an input from its two parts.
    pub fn new(sequence: Vec<i64>, queries: Vec<i64>) -> Self {
        Self { sequence, queries }
    }
}
