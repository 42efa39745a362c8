use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default per-file size cap in bytes.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 2_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// Zero byte or more than 20% non-text bytes in the leading sample.
    #[default]
    Heuristic,
    /// Delegate the sample to `content_inspector`.
    Accurate,
    /// No sampling; files are only rejected when they are not valid UTF-8.
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatcatOptions {
    pub root: PathBuf,
    /// Destination file; `None` writes to standard output.
    pub output: Option<PathBuf>,
    /// User-supplied ignore tokens, merged with the defaults at match time.
    pub ignore_tokens: Vec<String>,
    pub max_file_bytes: u64,
    pub binary_detection: BinaryDetection,
}
impl Default for FlatcatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: None,
            ignore_tokens: Vec::new(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            binary_detection: BinaryDetection::Heuristic,
        }
    }
}
#[derive(Debug, Default)]
pub struct FlatcatBuilder {
    options: FlatcatOptions,
}
impl FlatcatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: FlatcatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output(mut self, path: Option<PathBuf>) -> Self {
        self.options.output = path;
        self
    }
    pub fn ignore_tokens(mut self, tokens: Vec<String>) -> Self {
        self.options.ignore_tokens = tokens;
        self
    }
    pub fn max_file_bytes(mut self, limit: u64) -> Self {
        self.options.max_file_bytes = limit;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> FlatcatOptions {
        self.options
    }
}
