//! Rendering and sinks for flatcat results.
//!
//! Each accepted file becomes one block:
//!
//! ```text
//! <file path=relative/unix/style/path>
//! ...content, ending with exactly one added newline if it had none...
//! </file>
//!
//! ```
//!
//! Paths and contents are written verbatim. A literal `</file>` inside a file
//! is not escaped.

use crate::{FlatcatError, FlatcatOptions, FlatcatResult, RunStats};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the rendered blob goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// Created or truncated.
    File(PathBuf),
}
impl From<&FlatcatOptions> for OutputTarget {
    fn from(options: &FlatcatOptions) -> Self {
        match &options.output {
            Some(path) => OutputTarget::File(path.clone()),
            None => OutputTarget::Stdout,
        }
    }
}

/// Format of the statistics written to the diagnostic stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
}

/// Renders one file block.
pub fn render_block(path: &str, content: &str) -> String {
    let mut out = String::with_capacity(path.len() + content.len() + 24);
    out.push_str("<file path=");
    out.push_str(path);
    out.push_str(">\n");
    out.push_str(content);
    if !content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str("</file>\n\n");
    out
}

/// Concatenates the blocks of all accepted files in their stored order.
pub fn format_result(result: &FlatcatResult) -> String {
    let capacity = result
        .files
        .iter()
        .map(|f| f.path.len() + f.content.len() + 24)
        .sum();
    let mut out = String::with_capacity(capacity);
    for file in &result.files {
        out.push_str(&render_block(&file.path, &file.content));
    }
    out
}

/// Writes the rendered result to `target`.
pub fn write_result(result: &FlatcatResult, target: &OutputTarget) -> Result<(), FlatcatError> {
    let content = format_result(result);
    match target {
        OutputTarget::File(path) => {
            fs::write(path, content).map_err(|e| FlatcatError::io(path, e))?;
        }
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(content.as_bytes())
                .and_then(|_| handle.flush())
                .map_err(|e| FlatcatError::io("<stdout>", e))?;
        }
    }
    Ok(())
}

pub fn format_stats(stats: &RunStats, format: StatsFormat) -> String {
    match format {
        StatsFormat::Text => format!(
            "Files: {} total, {} ignored, {} binary, {} too large, {} unreadable, {} included",
            stats.total,
            stats.ignored,
            stats.binary,
            stats.too_large,
            stats.unreadable,
            stats.included
        ),
        StatsFormat::Json => serde_json::to_string(stats).unwrap_or_else(|e| {
            format!("{{\"error\":\"stats serialization failed: {e}\"}}")
        }),
    }
}
