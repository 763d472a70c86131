//! Renders query results for stdout.

use crate::engine::QueryReport;
use crate::types::error::SearchResult;

/// Formats results as a plain line or as JSON.
pub struct ResultWriter;

impl ResultWriter {
    /// Indices joined by single spaces, e.g. `"2 -1 4"`.
    pub fn text(indices: &[i64]) -> String {
        indices
            .iter()
            .map(|index| index.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The full report as JSON.
    pub fn json(report: &QueryReport, pretty: bool) -> SearchResult<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(rendered)
    }
}
