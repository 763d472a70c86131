//! Batch runner — answers every query of an input against its sequence.

use serde::Serialize;

use crate::types::SearchInput;

use super::search::search;

/// Look up each query in `sequence`, preserving query order.
pub fn search_all(sequence: &[i64], queries: &[i64]) -> Vec<i64> {
    log::debug!(
        "searching {} queries over {} elements",
        queries.len(),
        sequence.len()
    );
    queries
        .iter()
        .map(|&target| search(sequence, target))
        .collect()
}

/// Answer for a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    /// The value that was looked up.
    pub target: i64,
    /// Its index in the sequence, or -1.
    pub index: i64,
}

/// Answers for a whole input, in query order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryReport {
    /// Number of elements in the searched sequence.
    pub sequence_len: usize,
    /// One outcome per query.
    pub results: Vec<QueryOutcome>,
}

impl QueryReport {
    /// Run every query in `input` and collect the outcomes.
    pub fn build(input: &SearchInput) -> Self {
        let indices = search_all(&input.sequence, &input.queries);
        let results = input
            .queries
            .iter()
            .zip(indices)
            .map(|(&target, index)| QueryOutcome { target, index })
            .collect();
        Self {
            sequence_len: input.sequence.len(),
            results,
        }
    }

    /// The bare indices, in query order.
    pub fn indices(&self) -> Vec<i64> {
        self.results.iter().map(|outcome| outcome.index).collect()
    }

    /// Number of queries that matched an element.
    pub fn found_count(&self) -> usize {
        self.results
            .iter()
            .filter(|outcome| outcome.index >= 0)
            .count()
    }
}
