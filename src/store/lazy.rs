//! Digest store that loads its content on demand

use super::reader::{ContentReader, PathContentReader};
use super::traits::DigestStore;
use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Retains no bytes; every read goes through the content reader
///
/// A store without a reader is valid and reports no content.
#[derive(Clone)]
pub struct LazyDigestStore {
    reader: Option<Arc<dyn ContentReader>>,
    media_type: String,
    digest: String,
    size: Option<u64>,
}

impl LazyDigestStore {
    pub fn new(
        reader: Option<Arc<dyn ContentReader>>,
        media_type: impl Into<String>,
        digest: impl Into<String>,
    ) -> Self {
        LazyDigestStore {
            reader,
            media_type: media_type.into(),
            digest: digest.into(),
            size: None,
        }
    }

    /// Read content from a file, opened afresh on each access
    pub fn from_path(
        path: impl Into<PathBuf>,
        media_type: impl Into<String>,
        digest: impl Into<String>,
    ) -> Self {
        Self::new(
            Some(Arc::new(PathContentReader::new(path))),
            media_type,
            digest,
        )
    }

    /// Attach a known logical size
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn reader(&self) -> Option<&Arc<dyn ContentReader>> {
        self.reader.as_ref()
    }

    fn location(&self) -> String {
        self.reader
            .as_ref()
            .map(|r| r.location())
            .unwrap_or_else(|| "<none>".to_string())
    }
}

impl DigestStore for LazyDigestStore {
    fn digest(&self) -> &str {
        &self.digest
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    fn size(&self) -> Option<u64> {
        self.size
    }

    fn bytes(&self) -> Result<Option<Vec<u8>>> {
        let Some(reader) = &self.reader else {
            return Ok(None);
        };

        tracing::trace!(digest = %self.digest, location = %reader.location(), "loading lazy blob");

        reader
            .read_all_bytes()
            .map(Some)
            .map_err(|source| Error::ContentLoad {
                digest: self.digest.clone(),
                location: reader.location(),
                source,
            })
    }

    fn log_string(&self) -> String {
        let size = self
            .size
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        format!(
            "LazyDigestStore(digest={}; size={}; mediaType={}; bytes=<omitted>)",
            self.digest, size, self.media_type
        )
    }
}

impl fmt::Display for LazyDigestStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LazyDigestStore(mediaType={}; digest={}; location={})",
            self.media_type,
            self.digest,
            self.location()
        )
    }
}

impl fmt::Debug for LazyDigestStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyDigestStore")
            .field("digest", &self.digest)
            .field("media_type", &self.media_type)
            .field("size", &self.size)
            .field("has_reader", &self.reader.is_some())
            .finish()
    }
}
