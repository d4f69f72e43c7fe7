//! Lowercase RFC 4648 base32 with `_` padding
//!
//! Produces filesystem and URL safe tokens from arbitrary strings. Encoding
//! emits lowercase text; decoding is case-insensitive and accepts the token
//! with or without its trailing `_` padding.

use crate::{Error, Result};
use data_encoding::{Encoding, Specification};

/// Pad character used in place of RFC 4648's `=`
pub const PADDING: char = '_';

fn build(spec: Specification) -> Result<Encoding> {
    spec.encoding()
        .map_err(|e| Error::Encoding(format!("invalid base32 specification: {}", e)))
}

fn encoder() -> Result<Encoding> {
    let mut spec = data_encoding::BASE32.specification();
    spec.padding = Some(PADDING);
    build(spec)
}

/// Unpadded and lenient about non-zero bits in the last symbol
fn decoder() -> Result<Encoding> {
    let mut spec = data_encoding::BASE32.specification();
    spec.padding = None;
    spec.check_trailing_bits = false;
    build(spec)
}

/// Encode the UTF-8 bytes of `s`
///
/// With `padded == false` the output is cut at the first pad character.
pub fn encode_base32(s: &str, padded: bool) -> Result<String> {
    let result = encoder()?
        .encode(s.as_bytes())
        .to_lowercase();
    if padded {
        return Ok(result);
    }
    Ok(match result.find(PADDING) {
        Some(p) => result[..p].to_string(),
        None => result,
    })
}

/// Decode a token produced by [`encode_base32`]
///
/// Non-zero trailing bits in the final symbol are ignored. Bytes that are
/// not valid UTF-8 are replaced with U+FFFD.
pub fn decode_base32(encoded: &str) -> Result<String> {
    let upper = encoded.to_uppercase();
    let body = upper.trim_end_matches(PADDING);
    let bytes = decoder()?
        .decode(body.as_bytes())
        .map_err(|e| Error::Encoding(format!("invalid base32 '{}': {}", encoded, e)))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_foo() {
        assert_eq!(encode_base32("foo", true).unwrap(), "mzxw6___");
        assert_eq!(encode_base32("foo", false).unwrap(), "mzxw6");
        assert_eq!(decode_base32("mzxw6___").unwrap(), "foo");
    }

    #[test]
    fn test_unpadded_is_unchanged_when_no_padding_needed() {
        // 5 bytes fill a whole 8-char block
        assert_eq!(encode_base32("hello", true).unwrap(), "nbswy3dp");
        assert_eq!(encode_base32("hello", false).unwrap(), "nbswy3dp");
    }

    #[test]
    fn test_roundtrip_padded_and_repadded() {
        for s in ["", "a", "ab", "abc", "abcd", "abcde", "héllo wörld", "🦀 crab"] {
            let padded = encode_base32(s, true).unwrap();
            assert_eq!(padded.len() % 8, 0);
            assert_eq!(decode_base32(&padded).unwrap(), s);

            let mut repadded = encode_base32(s, false).unwrap();
            assert!(!repadded.contains(PADDING));
            while repadded.len() % 8 != 0 {
                repadded.push(PADDING);
            }
            assert_eq!(decode_base32(&repadded).unwrap(), s);
        }
    }

    #[test]
    fn test_decode_accepts_unpadded_and_uppercase() {
        assert_eq!(decode_base32("mzxw6").unwrap(), "foo");
        assert_eq!(decode_base32("MZXW6___").unwrap(), "foo");
    }

    #[test]
    fn test_decode_ignores_trailing_bits() {
        // "mzxw7" differs from "mzxw6" only in the bit past the last byte
        assert_eq!(decode_base32("mzxw7").unwrap(), "foo");
        assert_eq!(decode_base32("mzxw7___").unwrap(), "foo");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_base32("m!xw6___"), Err(Error::Encoding(_))));
        assert!(matches!(decode_base32("a"), Err(Error::Encoding(_))));
    }
}
