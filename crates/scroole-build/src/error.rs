//! Error types for the Scroole driver

use scroole_core::ScrooleError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for driver operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Error type for driver operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// The declaration source root does not exist
    #[error("source directory does not exist: {0:?}")]
    SourceDirNotFound(PathBuf),

    /// A source or output root exists but is not a directory
    #[error("not a directory: {0:?}")]
    NotADirectory(PathBuf),

    /// Reading a declaration or writing generated source failed
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The discovery pattern could not be built from the source root
    #[error("invalid discovery pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A discovered path cannot be turned into a target name
    #[error("path cannot be mapped to a target name: {0:?}")]
    InvalidPath(PathBuf),

    /// Parsing or generating one declaration failed
    #[error("{target}: {source}")]
    Unit {
        target: String,
        #[source]
        source: ScrooleError,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }

    /// The target name of a failed unit, if this error belongs to one.
    pub fn target(&self) -> Option<&str> {
        match self {
            BuildError::Unit { target, .. } => Some(target),
            _ => None,
        }
    }
}

impl From<glob::GlobError> for BuildError {
    fn from(error: glob::GlobError) -> Self {
        let path = error.path().to_path_buf();
        BuildError::io(path, error.into())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
