use serde::{Deserialize, Serialize};

/// A single accepted file with its root-relative path and decoded content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Root-relative path with `/` separators.
    pub path: String,
    /// The full UTF-8 content of the file.
    pub content: String,
    /// Size of the file in bytes.
    pub size: u64,
}

/// Counters gathered over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Regular files discovered under the root.
    pub total: usize,
    /// Files excluded by an ignore token.
    pub ignored: usize,
    /// Files rejected by the binary check or by UTF-8 decoding.
    pub binary: usize,
    /// Files larger than the size cap.
    pub too_large: usize,
    /// Files that could not be probed or read.
    pub unreadable: usize,
    /// Files rendered into the output.
    pub included: usize,
}

/// The complete result of a flatcat run.
#[derive(Debug, Serialize, Deserialize)]
pub struct FlatcatResult {
    /// Accepted files, sorted by path.
    pub files: Vec<FileEntry>,
    pub stats: RunStats,
}
