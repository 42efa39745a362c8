use crate::binary::{SAMPLE_SIZE, is_binary};
use crate::error::FlatcatError;
use crate::filter::{IgnoreSet, slash_path};
use crate::options::{BinaryDetection, FlatcatOptions};
use crate::types::{FileEntry, FlatcatResult, RunStats};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::io;
use std::path::{Component, Path, PathBuf};

/// A regular file found under the root.
#[derive(Debug, Clone)]
struct Candidate {
    abs: PathBuf,
    rel: String,
}

struct Walker {
    root: PathBuf,
    inner: ignore::Walk,
}
impl Walker {
    /// Every filter of the `ignore` crate is switched off: the walk sees all
    /// entries and ignore tokens are applied afterwards.
    fn new(root: &Path) -> Result<Self, FlatcatError> {
        fs::read_dir(root).map_err(|e| FlatcatError::read_root(root, e))?;
        let mut builder = WalkBuilder::new(root);
        builder.standard_filters(false).follow_links(false);
        Ok(Self {
            root: root.to_path_buf(),
            inner: builder.build(),
        })
    }
    fn collect_files(self) -> Result<Vec<Candidate>, FlatcatError> {
        let mut files = Vec::new();
        for result in self.inner {
            let entry = result.map_err(|e| FlatcatError::Walk(e.to_string()))?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let rel = entry.path().strip_prefix(&self.root).map_err(|_| {
                FlatcatError::InvalidPath(format!(
                    "{} is not under {}",
                    entry.path().display(),
                    self.root.display()
                ))
            })?;
            files.push(Candidate {
                rel: slash_path(rel),
                abs: entry.into_path(),
            });
        }
        files.sort_by(|a, b| a.rel.cmp(&b.rel));
        Ok(files)
    }
}

enum Outcome {
    Accepted(String, u64),
    TooLarge(u64),
    Binary,
}

fn read_file_content(
    path: &Path,
    binary_detection: BinaryDetection,
    size_limit: u64,
) -> Result<Outcome, FlatcatError> {
    let size = fs::metadata(path)
        .map_err(|e| FlatcatError::io(path, e))?
        .len();
    if size > size_limit {
        return Ok(Outcome::TooLarge(size));
    }
    let file = File::open(path).map_err(|e| FlatcatError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(SAMPLE_SIZE);
    reader
        .by_ref()
        .take(SAMPLE_SIZE as u64)
        .read_to_end(&mut bytes)
        .map_err(|e| FlatcatError::io(path, e))?;
    if is_binary(&bytes, binary_detection) {
        return Ok(Outcome::Binary);
    }
    bytes.reserve((size as usize).saturating_sub(bytes.len()));
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| FlatcatError::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok(Outcome::Accepted(content, size)),
        Err(_) => Ok(Outcome::Binary),
    }
}

/// Makes `path` absolute against the current directory and folds `.` and
/// `..` components lexically, so root and output compare component-wise.
fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    let mut resolved = PathBuf::new();
    for component in std::path::absolute(path)?.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// Walks `options.root`, filters, classifies and reads every file, and
/// returns the accepted files in path order together with the run counters.
///
/// # Errors
///
/// Fails when the root cannot be listed or traversal below it fails. Problems
/// with individual files are counted, never returned.
pub fn flatcat(options: FlatcatOptions) -> Result<FlatcatResult, FlatcatError> {
    let root = resolve_path(&options.root).map_err(|e| FlatcatError::read_root(&options.root, e))?;
    let output = options
        .output
        .as_deref()
        .map(resolve_path)
        .transpose()
        .map_err(|e| FlatcatError::InvalidPath(format!("output path: {e}")))?;
    #[cfg(feature = "logging")]
    tracing::debug!("Starting flatcat with root: {}", root.display());
    let ignores = IgnoreSet::new(&options.ignore_tokens, &root, output.as_deref());
    let candidates = Walker::new(&root)?.collect_files()?;
    let mut stats = RunStats {
        total: candidates.len(),
        ..Default::default()
    };
    let mut files = Vec::new();
    for candidate in candidates {
        if ignores.is_ignored(&candidate.rel) {
            #[cfg(feature = "logging")]
            tracing::trace!("Ignored: {}", candidate.rel);
            stats.ignored += 1;
            continue;
        }
        match read_file_content(
            &candidate.abs,
            options.binary_detection,
            options.max_file_bytes,
        ) {
            Ok(Outcome::Accepted(content, size)) => {
                stats.included += 1;
                files.push(FileEntry {
                    path: candidate.rel,
                    content,
                    size,
                });
            }
            Ok(Outcome::TooLarge(_size)) => {
                #[cfg(feature = "logging")]
                tracing::debug!(
                    "File too large ({} > {}), skipping {}",
                    _size,
                    options.max_file_bytes,
                    candidate.rel
                );
                stats.too_large += 1;
            }
            Ok(Outcome::Binary) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Binary file detected: {}", candidate.rel);
                stats.binary += 1;
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping unreadable file: {}", _e);
                stats.unreadable += 1;
            }
        }
    }
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Included {} of {} files ({} ignored, {} binary, {} too large)",
        stats.included,
        stats.total,
        stats.ignored,
        stats.binary,
        stats.too_large
    );
    Ok(FlatcatResult { files, stats })
}
