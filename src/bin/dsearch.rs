//! CLI entry point for the `dsearch` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;

use descending_search::cli::{commands, OutputFormat};
use descending_search::{SearchError, DEFAULT_INPUT_PATH};

#[derive(Parser)]
#[command(
    name = "dsearch",
    about = "Look up values in a descending-sorted sequence of integers"
)]
struct Cli {
    /// Input file: line 1 is the sequence, line 2 the values to find
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::new();
    logger.filter_level(LevelFilter::Warn).parse_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = commands::cmd_run(&cli.input, cli.format, cli.pretty) {
        eprintln!("Error: {}", e);
        let code = match &e {
            SearchError::Io(_) => 1,
            SearchError::MissingLine(_) | SearchError::InvalidInteger { .. } => 2,
            SearchError::Json(_) => 3,
        };
        process::exit(code);
    }
}
