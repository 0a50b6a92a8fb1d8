use std::{io, path::PathBuf};

/// Shared error type for every helper in the crate.
#[derive(thiserror::Error, Debug)]
pub enum UtilError {
    /// A path required by the operation does not exist.
    #[error("Target path is not found. Path: {}", .0.display())]
    NotFound(PathBuf),

    /// A destination path exists when it must be absent.
    #[error("Target path is already exists. Path: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The path was expected to be a directory.
    #[error("Target path is not a directory. Path: {}", .0.display())]
    NotDirectory(PathBuf),

    /// The directory was expected to have no entries.
    #[error("Target directory is not empty. Path: {}", .0.display())]
    NotEmpty(PathBuf),

    /// File system I/O failure.
    #[error("I/O error while accessing {}", .0.display())]
    Io(PathBuf, #[source] io::Error),

    /// Directory traversal failure.
    #[error("failed to walk directory {}", .0.display())]
    Walk(PathBuf, #[source] walkdir::Error),

    /// Standard input closed before an answer was given.
    #[error("input stream closed before a valid answer was read")]
    InputClosed,
}

impl UtilError {
    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }

    pub fn walk(path: impl Into<PathBuf>, error: walkdir::Error) -> Self {
        Self::Walk(path.into(), error)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }
}

/// Shared result alias for the crate.
pub type Result<T> = std::result::Result<T, UtilError>;
