use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PodError {
    // Scanning
    #[error("cannot read coverage directory {}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Config
    #[error("invalid file prefix {0:?}")]
    InvalidPrefix(String),

    #[error("origin directories and explicit file lists cannot be mixed")]
    MixedInputs,
}

impl PodError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::DirectoryUnreadable { path, .. } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn unreadable(path: &Path, source: std::io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}
