//! Reads the two-line input: the sequence, then the queries.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::error::{SearchError, SearchResult};
use crate::types::SearchInput;

/// Parser for whitespace-separated integer input.
pub struct InputReader;

impl InputReader {
    /// Read and parse an input file.
    pub fn read_from_file(path: &Path) -> SearchResult<SearchInput> {
        let file = File::open(path)?;
        let input = Self::read_from(BufReader::new(file))?;
        log::debug!(
            "read {} elements and {} queries from {}",
            input.sequence.len(),
            input.queries.len(),
            path.display()
        );
        Ok(input)
    }

    /// Parse input from any buffered reader.
    ///
    /// Line 1 holds the sequence and line 2 the queries. Anything after the
    /// second line is ignored.
    pub fn read_from(reader: impl BufRead) -> SearchResult<SearchInput> {
        let mut lines = reader.lines();
        let sequence = Self::parse_line(&Self::next_line(&mut lines, 1)?, 1)?;
        let queries = Self::parse_line(&Self::next_line(&mut lines, 2)?, 2)?;
        Ok(SearchInput::new(sequence, queries))
    }

    /// Parse one line of whitespace-separated integers.
    ///
    /// `line_no` is 1-based and only used in error reports.
    pub fn parse_line(line: &str, line_no: usize) -> SearchResult<Vec<i64>> {
        line.split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| SearchError::InvalidInteger {
                        line: line_no,
                        token: token.to_string(),
                    })
            })
            .collect()
    }

    fn next_line(
        lines: &mut impl Iterator<Item = std::io::Result<String>>,
        line_no: usize,
    ) -> SearchResult<String> {
        match lines.next() {
            Some(line) => Ok(line?),
            None => Err(SearchError::MissingLine(line_no)),
        }
    }
}
