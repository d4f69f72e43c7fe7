//! Content readers: on-demand access to bytes held elsewhere

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Reads a blob's bytes from a backing location
///
/// Implementations are shared across threads and must support independent
/// concurrent reads.
pub trait ContentReader: Send + Sync + fmt::Debug {
    /// Read the complete content of the backing source
    fn read_all_bytes(&self) -> io::Result<Vec<u8>>;

    /// Human readable identification of the backing source, used in errors
    fn location(&self) -> String;
}

/// Reads a file on each call, holding no handle between calls
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathContentReader {
    path: PathBuf,
}

impl PathContentReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        PathContentReader { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentReader for PathContentReader {
    fn read_all_bytes(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
