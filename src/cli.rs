//! Command-line argument parsing.
//!
//! Every option takes either `--name value` or `--name=value`. The first
//! positional argument is the root; further positionals are accepted and
//! dropped.

use crate::options::{BinaryDetection, DEFAULT_MAX_FILE_BYTES, FlatcatBuilder, FlatcatOptions};
use crate::output::StatsFormat;
use clap::Parser;
use std::path::PathBuf;

/// flatcat: flatten a directory's text files into one tagged blob
#[derive(Parser, Debug, Clone)]
#[command(name = "flatcat", version, about, long_about = None)]
pub struct Cli {
    /// Root directory to flatten
    pub root: PathBuf,

    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Write the result to this file instead of standard output
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Additional ignore tokens, comma-separated (can be repeated)
    #[arg(long = "ignore", value_name = "TOKEN", value_delimiter = ',')]
    pub ignore_tokens: Vec<String>,

    /// Skip files larger than this many bytes
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_MAX_FILE_BYTES,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_file_bytes: u64,

    /// Binary detection strategy (heuristic, accurate, none)
    #[arg(long, default_value = "heuristic", value_parser = parse_binary_detection)]
    pub binary_detection: BinaryDetection,

    /// Statistics format on stderr (text, json)
    #[arg(long, default_value = "text", value_parser = parse_stats_format)]
    pub stats: StatsFormat,

    /// Do not print statistics
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "heuristic" => Ok(BinaryDetection::Heuristic),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

fn parse_stats_format(s: &str) -> Result<StatsFormat, String> {
    match s {
        "text" => Ok(StatsFormat::Text),
        "json" => Ok(StatsFormat::Json),
        _ => Err(format!("invalid stats format: {}", s)),
    }
}

impl Cli {
    /// Builds the run options. Paths are passed through as given; `flatcat`
    /// resolves them.
    pub fn options(&self) -> FlatcatOptions {
        FlatcatBuilder::new(&self.root)
            .output(self.output.clone())
            .ignore_tokens(self.ignore_tokens.clone())
            .max_file_bytes(self.max_file_bytes)
            .binary_detection(self.binary_detection)
            .build()
    }
}
