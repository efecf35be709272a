//! Error types for tree building

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for tree building operations
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors surfaced by `build_tree`.
///
/// The first three variants are detected before any traversal starts.
/// Traversal itself never fails: unreadable entries are logged and skipped.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("Directory/File not found: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("Provide a string to find references in the given file: {}", .0.display())]
    InvalidInput(PathBuf),
    #[error("Invalid search pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl TreeError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound(path.into())
    }

    pub fn invalid_input(path: impl Into<PathBuf>) -> Self {
        Self::InvalidInput(path.into())
    }
}
