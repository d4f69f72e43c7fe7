//! Pluggable compression for in-memory retention

use std::fmt;
use std::io;

/// A lossless `compress` / `decompress` pair
///
/// Implementations must satisfy `decompress(compress(b)) == b` for every
/// input and must be usable from several threads at once.
pub trait Compression: Send + Sync + fmt::Debug {
    /// Compress `data` into an opaque blob
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;

    /// Recover the original bytes from a blob produced by `compress`
    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>>;
}

/// zstd at a fixed level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Zstd {
    pub level: i32,
}

impl Zstd {
    pub const DEFAULT_LEVEL: i32 = 3;

    pub fn new(level: i32) -> Self {
        Zstd { level }
    }
}

impl Default for Zstd {
    fn default() -> Self {
        Zstd::new(Self::DEFAULT_LEVEL)
    }
}

impl Compression for Zstd {
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        zstd::encode_all(data, self.level)
    }

    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        zstd::decode_all(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zstd_roundtrip() {
        let codec = Zstd::default();
        let original = b"hello world".repeat(100);
        let compressed = codec.compress(&original).unwrap();
        assert!(compressed.len() < original.len());
        assert_eq!(codec.decompress(&compressed).unwrap(), original);
    }

    #[test]
    fn test_zstd_empty_input() {
        let codec = Zstd::default();
        let compressed = codec.compress(b"").unwrap();
        assert!(codec.decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn test_zstd_rejects_garbage() {
        assert!(Zstd::default().decompress(b"not a zstd frame").is_err());
    }
}
