//! Digest store that keeps its content compressed in memory
//!
//! The uncompressed input is dropped at construction; every read pays a
//! full decompression so that only the compressed buffer stays resident.

use super::codec::{Compression, Zstd};
use super::traits::DigestStore;
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::fmt;

/// Compressed in-memory retention
pub struct CompressedDigestStore<C: Compression = Zstd> {
    compressed: Box<[u8]>,
    media_type: String,
    digest: String,
    size: u64,
    codec: C,
}

impl CompressedDigestStore<Zstd> {
    /// Compress `bytes` with the default zstd codec
    pub fn new(
        bytes: impl AsRef<[u8]>,
        media_type: impl Into<String>,
        digest: impl Into<String>,
        size: u64,
    ) -> Result<Self> {
        Self::with_codec(Zstd::default(), bytes, media_type, digest, size)
    }
}

impl<C: Compression> CompressedDigestStore<C> {
    /// Compress `bytes` with the given codec
    ///
    /// Fails with [`Error::Compression`] if the codec rejects the input.
    pub fn with_codec(
        codec: C,
        bytes: impl AsRef<[u8]>,
        media_type: impl Into<String>,
        digest: impl Into<String>,
        size: u64,
    ) -> Result<Self> {
        let digest = digest.into();
        let compressed = codec
            .compress(bytes.as_ref())
            .map_err(|source| Error::Compression {
                digest: digest.clone(),
                source,
            })?;

        tracing::debug!(
            digest = %digest,
            size,
            compressed_len = compressed.len(),
            "retained compressed blob"
        );

        Ok(CompressedDigestStore {
            compressed: compressed.into_boxed_slice(),
            media_type: media_type.into(),
            digest,
            size,
            codec,
        })
    }

    /// Length of the resident compressed buffer
    pub fn compressed_len(&self) -> usize {
        self.compressed.len()
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }
}

impl<C: Compression> DigestStore for CompressedDigestStore<C> {
    fn digest(&self) -> &str {
        &self.digest
    }

    fn media_type(&self) -> &str {
        &self.media_type
    }

    fn size(&self) -> Option<u64> {
        Some(self.size)
    }

    fn bytes(&self) -> Result<Option<Vec<u8>>> {
        let data = self.codec.decompress(&self.compressed).map_err(|e| {
            Error::Corruption(format!("cannot decompress content of {}: {}", self.digest, e))
        })?;
        Ok(Some(data))
    }

    fn log_string(&self) -> String {
        format!(
            "CompressedDigestStore(digest={}; size={}; mediaType={}; bytes=<omitted>)",
            self.digest, self.size, self.media_type
        )
    }
}

impl<C: Compression> fmt::Display for CompressedDigestStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CompressedDigestStore(mediaType={}; digest={}; size={}; bytesBase64={})",
            self.media_type,
            self.digest,
            self.size,
            BASE64.encode(&self.compressed)
        )
    }
}

impl<C: Compression> fmt::Debug for CompressedDigestStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressedDigestStore")
            .field("digest", &self.digest)
            .field("media_type", &self.media_type)
            .field("size", &self.size)
            .field("compressed_len", &self.compressed.len())
            .field("codec", &self.codec)
            .finish()
    }
}
