//! Digest and encoding utilities
//!
//! Pure helpers that produce the identifiers blobs are keyed by.

mod base32;
mod hashing;
mod random;

pub use base32::{decode_base32, encode_base32, PADDING};
pub use hashing::{digest, digest_path, digest_reader, digest_str};
pub use random::{random_256_hex, random_string, random_string_between};
