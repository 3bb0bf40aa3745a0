//! Box error types.

use std::io::{self, SeekFrom};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Error type shared by virtual files, boxes and walkers.
#[derive(Debug, Error)]
pub enum BoxError {
    /// No entry is registered under the path.
    #[error("not found: {0}")]
    NotFound(String),

    /// Only a seek back to the start is supported.
    #[error("unsupported seek operation: {0:?}")]
    UnsupportedSeek(SeekFrom),

    /// Expected a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Expected a file.
    #[error("is a directory: {0}")]
    IsADirectory(String),

    /// Path already exists.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Invalid path.
    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    /// Content could not be decoded as UTF-8.
    #[error("{path} is not valid UTF-8")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: FromUtf8Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Returned by a walk callback to prune the current directory.
    /// Walks consume it, so it never reaches the caller of `walk`.
    #[error("skip this directory")]
    SkipDir,

    /// Any other error, typically raised by a walk callback.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoxError {
    /// Create a NotFound error.
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound(path.into())
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: impl Into<String>) -> Self {
        Self::NotADirectory(path.into())
    }

    /// Create an IsADirectory error.
    pub fn is_a_directory(path: impl Into<String>) -> Self {
        Self::IsADirectory(path.into())
    }

    /// Create an AlreadyExists error.
    pub fn already_exists(path: impl Into<String>) -> Self {
        Self::AlreadyExists(path.into())
    }

    /// Create an InvalidPath error.
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }

    /// Returns true for the prune sentinel.
    pub fn is_skip_dir(&self) -> bool {
        matches!(self, Self::SkipDir)
    }
}

/// Convert BoxError to std::io::Error so the `Read`/`Write`/`Seek` impls can surface it.
/// The original error stays reachable through `io::Error::get_ref`.
impl From<BoxError> for io::Error {
    fn from(e: BoxError) -> Self {
        let kind = match e {
            BoxError::Io(inner) => return inner,
            BoxError::NotFound(_) => io::ErrorKind::NotFound,
            BoxError::UnsupportedSeek(_) => io::ErrorKind::Unsupported,
            BoxError::NotADirectory(_) => io::ErrorKind::NotADirectory,
            BoxError::IsADirectory(_) => io::ErrorKind::IsADirectory,
            BoxError::AlreadyExists(_) => io::ErrorKind::AlreadyExists,
            BoxError::InvalidPath(_) => io::ErrorKind::InvalidInput,
            BoxError::InvalidUtf8 { .. } => io::ErrorKind::InvalidData,
            BoxError::SkipDir | BoxError::Other(_) => io::ErrorKind::Other,
        };
        io::Error::new(kind, e)
    }
}
