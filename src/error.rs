//! Error types for digest_store

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for digest_store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in digest_store operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to read digest source {}: {}", .path.display(), .source)]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to compress content for {digest}: {source}")]
    Compression {
        digest: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corruption detected: {0}")]
    Corruption(String),

    #[error("Unable to load digest content for {digest} at path: {location}")]
    ContentLoad {
        digest: String,
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),
}
