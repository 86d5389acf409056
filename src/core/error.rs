use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The merged sequence would grow past the configured ceiling.
    #[error("sequence exceeds capacity of {limit} bytes (needed {attempted})")]
    CapacityExceeded { limit: usize, attempted: usize },
}

impl LoadError {
    pub fn open(path: &Path, source: io::Error) -> Self {
        LoadError::Open {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn read(path: &Path, source: io::Error) -> Self {
        LoadError::Read {
            path: path.to_path_buf(),
            source,
        }
    }
}
