//! # Flatcat
//!
//! `flatcat` walks a directory tree and concatenates every readable text file
//! into one blob, each file wrapped in a `<file path=...>` block. Files are
//! dropped when an ignore token matches their path, when they exceed the size
//! cap, or when they look binary. Blocks are ordered by relative path, so two
//! runs over an unchanged tree produce identical output.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use flatcat::{FlatcatBuilder, BinaryDetection, flatcat, output};
//!
//! let options = FlatcatBuilder::new(".")
//!     .ignore_tokens(vec!["target".into()])
//!     .binary_detection(BinaryDetection::Heuristic)
//!     .max_file_bytes(1_000_000)
//!     .build();
//!
//! let result = flatcat(options).expect("Failed to read directory");
//!
//! print!("{}", output::format_result(&result));
//! eprintln!("{}", output::format_stats(&result.stats, output::StatsFormat::Text));
//! ```

mod binary;
pub mod cli;
mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod types;

pub use binary::{NON_TEXT_THRESHOLD, SAMPLE_SIZE, looks_binary};
pub use cli::Cli;
pub use engine::flatcat;
pub use error::FlatcatError;
pub use filter::{DEFAULT_IGNORES, IgnoreSet};
pub use options::{BinaryDetection, DEFAULT_MAX_FILE_BYTES, FlatcatBuilder, FlatcatOptions};
pub use types::{FileEntry, FlatcatResult, RunStats};
