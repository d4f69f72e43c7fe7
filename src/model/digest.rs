//! Content digest type using SHA-256

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::str::FromStr;

/// Algorithm prefix carried by every textual digest
pub const SHA256_PREFIX: &str = "sha256:";

/// A 32-byte SHA-256 digest used for content addressing
///
/// The textual form is `sha256:<64 lowercase hex chars>`, which is also how
/// the type serializes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest([u8; 32]);

impl Digest {
    /// Create a digest from raw hash bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    /// Hash arbitrary data
    pub fn of(data: &[u8]) -> Self {
        Digest(Sha256::digest(data).into())
    }

    /// Finish an incremental hasher into a digest
    pub(crate) fn from_hasher(hasher: Sha256) -> Self {
        Digest(hasher.finalize().into())
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert the hash body to lowercase hex (no algorithm prefix)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse the hash body from a hex string (no algorithm prefix)
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.len() != 64 || s.bytes().any(|b| b.is_ascii_uppercase()) {
            return Err(Error::InvalidDigest(format!(
                "expected 64 lowercase hex chars, got '{}'",
                s
            )));
        }
        let mut arr = [0u8; 32];
        hex::decode_to_slice(s, &mut arr)
            .map_err(|e| Error::InvalidDigest(format!("'{}': {}", s, e)))?;
        Ok(Digest(arr))
    }

    /// Parse the `sha256:<hex>` form
    pub fn parse(s: &str) -> Result<Self> {
        let body = s.strip_prefix(SHA256_PREFIX).ok_or_else(|| {
            Error::InvalidDigest(format!("missing '{}' prefix in '{}'", SHA256_PREFIX, s))
        })?;
        Self::from_hex(body)
    }

    /// Short prefix of the hex body for display (first 12 chars, like docker)
    pub fn short(&self) -> String {
        self.to_hex()[..12].to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SHA256_PREFIX, self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short())
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Digest::parse(s)
    }
}

impl TryFrom<String> for Digest {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Digest::parse(&s)
    }
}

impl From<Digest> for String {
    fn from(d: Digest) -> String {
        d.to_string()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
