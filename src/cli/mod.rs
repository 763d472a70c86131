//! Command-line support for the `dsearch` binary.

pub mod commands;

pub use commands::{cmd_run, OutputFormat};
