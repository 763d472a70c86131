//! CLI command implementations.

use std::path::Path;

use clap::ValueEnum;

use crate::engine::{is_descending, QueryReport};
use crate::format::{InputReader, ResultWriter};
use crate::types::SearchResult;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Space-separated indices on one line.
    #[default]
    Text,
    /// A JSON report with one entry per query.
    Json,
}

/// Read an input file, answer every query and print the results.
pub fn cmd_run(path: &Path, format: OutputFormat, pretty: bool) -> SearchResult<()> {
    let input = InputReader::read_from_file(path)?;

    if !is_descending(&input.sequence) {
        log::warn!(
            "sequence in {} is not in descending order; results are unspecified",
            path.display()
        );
    }

    let report = QueryReport::build(&input);
    log::debug!(
        "{} of {} queries found",
        report.found_count(),
        report.results.len()
    );

    match format {
        OutputFormat::Text => println!("{}", ResultWriter::text(&report.indices())),
        OutputFormat::Json => println!("{}", ResultWriter::json(&report, pretty)?),
    }
    Ok(())
}
