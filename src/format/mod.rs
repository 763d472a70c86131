//! Text input parsing and result rendering.

pub mod reader;
pub mod writer;

pub use reader::InputReader;
pub use writer::ResultWriter;
