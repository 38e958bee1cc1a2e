//! Error types for tree printing

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a whole `print_tree` call.
///
/// Failures to read a directory below the root are not represented here;
/// the walker renders them inline and keeps going.
#[derive(Debug, Error)]
pub enum TreeError {
    /// The root path does not exist.
    #[error("path '{}' does not exist", path.display())]
    PathNotFound { path: PathBuf },

    /// The root path exists but may not be accessed.
    #[error("access denied for path '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    /// The root path resolves to something other than a directory.
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Stat of the root failed for another reason.
    #[error("cannot access '{}': {source}", path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output sink failed.
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl TreeError {
    /// Classify a failed stat of the root path.
    pub fn from_stat(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Inaccessible { path, source: err },
        }
    }
}
