//! Retention configuration
//!
//! Decides, per blob, whether its bytes are kept compressed in memory or
//! left on backing storage and read on demand.
//!
//! ```json
//! { "compression_level": 3, "lazy_threshold": 8388608 }
//! ```

use crate::store::{CompressedDigestStore, DigestStore, LazyDigestStore, Zstd};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default size at or above which persisted blobs are read lazily (8 MiB)
pub const DEFAULT_LAZY_THRESHOLD: u64 = 8 * 1024 * 1024;

/// Tunables for choosing a retention strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// zstd level used for in-memory retention
    pub compression_level: i32,
    /// Persisted blobs of at least this many bytes are not held in memory
    pub lazy_threshold: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            compression_level: Zstd::DEFAULT_LEVEL,
            lazy_threshold: DEFAULT_LAZY_THRESHOLD,
        }
    }
}

impl StoreConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Failed to parse store config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let levels = zstd::compression_level_range();
        if !levels.contains(&self.compression_level) {
            return Err(Error::Config(format!(
                "compression_level {} outside {}..={}",
                self.compression_level,
                levels.start(),
                levels.end()
            )));
        }
        Ok(())
    }

    pub fn policy(&self) -> RetentionPolicy {
        RetentionPolicy {
            codec: Zstd::new(self.compression_level),
            lazy_threshold: self.lazy_threshold,
        }
    }
}

/// Which variant a blob ends up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retention {
    Compressed,
    Lazy,
}

/// Builds stores according to a [`StoreConfig`]
#[derive(Debug, Clone, Copy)]
pub struct RetentionPolicy {
    codec: Zstd,
    lazy_threshold: u64,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        StoreConfig::default().policy()
    }
}

impl RetentionPolicy {
    /// Lazy only pays off when the bytes already live somewhere re-readable
    pub fn choose(&self, size: u64, persisted: bool) -> Retention {
        if persisted && size >= self.lazy_threshold {
            Retention::Lazy
        } else {
            Retention::Compressed
        }
    }

    /// Wrap `bytes` in the store variant this policy picks
    ///
    /// `persisted_at` is where the same content can be re-read from, if
    /// anywhere. Size is taken from `bytes`.
    pub fn store(
        &self,
        bytes: Vec<u8>,
        media_type: impl Into<String>,
        digest: impl Into<String>,
        persisted_at: Option<&Path>,
    ) -> Result<Box<dyn DigestStore>> {
        let size = bytes.len() as u64;
        match (self.choose(size, persisted_at.is_some()), persisted_at) {
            (Retention::Lazy, Some(path)) => {
                drop(bytes);
                Ok(Box::new(
                    LazyDigestStore::from_path(path, media_type, digest).with_size(size),
                ))
            }
            _ => Ok(Box::new(CompressedDigestStore::with_codec(
                self.codec, bytes, media_type, digest, size,
            )?)),
        }
    }
}
