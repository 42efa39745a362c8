use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum FlatcatError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Cannot read root directory {path}: {source}")]
    ReadRoot {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(String),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}
impl FlatcatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FlatcatError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn read_root(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FlatcatError::ReadRoot {
            path: path.into(),
            source,
        }
    }
}
