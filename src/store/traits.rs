//! DigestStore trait definition

use crate::model::Descriptor;
use crate::Result;
use std::fmt;

/// A blob identified by its digest, independent of how its bytes are held
///
/// Implementations:
/// - [`CompressedDigestStore`](super::CompressedDigestStore) keeps a
///   compressed copy in memory
/// - [`LazyDigestStore`](super::LazyDigestStore) keeps nothing and reads
///   through a [`ContentReader`](super::ContentReader)
///
/// `Display` renders the full debug form and may include an encoded copy of
/// internal bytes. Use [`log_string`](DigestStore::log_string) for logs.
pub trait DigestStore: Send + Sync + fmt::Debug + fmt::Display {
    /// Digest in `sha256:<hex>` form, as supplied at construction
    fn digest(&self) -> &str;

    /// Opaque content-type label, e.g. an OCI media type
    fn media_type(&self) -> &str;

    /// Logical (uncompressed) length declared by the producer, if known
    fn size(&self) -> Option<u64>;

    /// Materialize the logical content
    ///
    /// Does the full decompression or read on every call. `Ok(None)` means
    /// the store has no content source at all.
    fn bytes(&self) -> Result<Option<Vec<u8>>>;

    /// Metadata-only rendering safe for log pipelines
    fn log_string(&self) -> String;

    /// OCI-style descriptor for this blob
    fn descriptor(&self) -> Descriptor {
        Descriptor::new(self.media_type(), self.digest(), self.size())
    }
}
