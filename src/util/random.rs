//! Random token generation
//!
//! Two deliberately different guarantees: [`random_string`] is fast and not
//! cryptographically secure, [`random_256_hex`] draws from the OS CSPRNG.

use crate::{Error, Result};
use rand::rngs::OsRng;
use rand::{thread_rng, Rng, RngCore};

/// `len` random bytes reinterpreted as UTF-8
///
/// Byte sequences that are not valid UTF-8 become U+FFFD, so the returned
/// string is well-formed but its byte length may differ from `len`.
pub fn random_string(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    thread_rng().fill_bytes(&mut bytes);
    String::from_utf8_lossy(&bytes).into_owned()
}

/// [`random_string`] with a length drawn uniformly from `[min, max)`
pub fn random_string_between(min: usize, max: usize) -> Result<String> {
    if min >= max {
        return Err(Error::InvalidArgument(format!(
            "empty length range [{}, {})",
            min, max
        )));
    }
    let len = thread_rng().gen_range(min..max);
    Ok(random_string(len))
}

/// 256 secure random bits as 64 lowercase hex chars
pub fn random_256_hex() -> String {
    let mut token = [0u8; 32];
    OsRng.fill_bytes(&mut token);
    hex::encode(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_string_zero_len() {
        assert_eq!(random_string(0), "");
    }

    #[test]
    fn test_random_string_is_valid_utf8_of_bounded_chars() {
        let s = random_string(64);
        // each input byte yields at most one char
        assert!(s.chars().count() <= 64);
        assert!(!s.is_empty());
    }

    #[test]
    fn test_random_string_between_range() {
        for _ in 0..50 {
            let s = random_string_between(3, 6).unwrap();
            let chars = s.chars().count();
            assert!(chars >= 1 && chars < 6, "got {} chars", chars);
        }
    }

    #[test]
    fn test_random_string_between_rejects_empty_range() {
        assert!(matches!(
            random_string_between(5, 5),
            Err(Error::InvalidArgument(_))
        ));
        assert!(random_string_between(6, 5).is_err());
    }

    #[test]
    fn test_random_256_hex_shape() {
        let a = random_256_hex();
        let b = random_256_hex();
        assert_eq!(a.len(), 64);
        assert!(a.bytes().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_ne!(a, b);
    }
}
