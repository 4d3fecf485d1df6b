use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while browsing the file tree
#[derive(Debug, Error)]
pub enum BrowseError {
    /// The requested path does not exist under the root
    #[error("No such file or directory: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl BrowseError {
    pub fn not_found(path: &Path) -> Self {
        Self::NotFound(path.display().to_string())
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
