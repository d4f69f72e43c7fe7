//! `sha256:<hex>` digest helpers over bytes, strings, files and readers
//!
//! All entry points produce the same string for the same content: hashing
//! a file streams it through the hasher, which yields exactly the digest of
//! the fully materialized bytes.

use crate::model::Digest;
use crate::{Error, Result};
use sha2::{Digest as _, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Digest an in-memory byte sequence
pub fn digest(bytes: impl AsRef<[u8]>) -> String {
    Digest::of(bytes.as_ref()).to_string()
}

/// Digest the UTF-8 encoding of a string
pub fn digest_str(s: &str) -> String {
    digest(s.as_bytes())
}

/// Digest everything a reader yields until EOF
///
/// Accepts an open file handle or any other `Read` source.
pub fn digest_reader(mut reader: impl Read) -> io::Result<String> {
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(Digest::from_hasher(hasher).to_string())
}

/// Digest the full content of the file at `path`
pub fn digest_path(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let source = |source| Error::Source {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(source)?;
    digest_reader(file).map_err(source)
}
