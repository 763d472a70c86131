//! Search engine — the descending binary search and the batch runner.

pub mod batch;
pub mod search;

pub use batch::{search_all, QueryOutcome, QueryReport};
pub use search::{find, is_descending, search};
