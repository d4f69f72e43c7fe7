//! # digest_store
//!
//! Content-addressed blob stores for registry artifacts (image layers,
//! manifests, config blobs).
//!
//! A blob is identified by its `sha256:<hex>` digest and reached through the
//! [`DigestStore`] trait, whatever keeps its bytes:
//!
//! - **Compressed**: a zstd copy held in memory, decompressed on each read
//! - **Lazy**: nothing held, re-read from backing storage on each read
//!
//! ## Example
//!
//! ```
//! use digest_store::{util, CompressedDigestStore, DigestStore};
//!
//! let digest = util::digest_str("hello");
//! let store = CompressedDigestStore::new(b"hello", "text/plain", digest, 5)?;
//! assert_eq!(store.bytes()?.as_deref(), Some(&b"hello"[..]));
//! # Ok::<(), digest_store::Error>(())
//! ```

pub mod config;
pub mod model;
pub mod store;
pub mod util;

mod error;

pub use config::{Retention, RetentionPolicy, StoreConfig};
pub use error::{Error, Result};
pub use model::{Descriptor, Digest};
pub use store::{
    Compression, CompressedDigestStore, ContentReader, DigestStore, LazyDigestStore,
    PathContentReader, Zstd,
};
