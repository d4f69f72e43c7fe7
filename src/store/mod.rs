//! Digest stores: one contract, two retention strategies
//!
//! Every store exposes the same digest, media type, size and logical bytes.
//! They differ only in what stays resident: a compressed copy
//! ([`CompressedDigestStore`]) or nothing at all ([`LazyDigestStore`]).

mod codec;
mod compressed;
mod lazy;
mod reader;
mod traits;

pub use codec::{Compression, Zstd};
pub use compressed::CompressedDigestStore;
pub use lazy::LazyDigestStore;
pub use reader::{ContentReader, PathContentReader};
pub use traits::DigestStore;
