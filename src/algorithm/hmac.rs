//! HMAC-SHA256 tag computation and constant-time signature comparison

use crate::error::{Error, Result};
use crate::keys::SecretKey;
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the raw 32-byte HMAC-SHA256 tag over a signing input
pub(crate) fn authentication_tag(key: &SecretKey, message: &[u8]) -> Result<Vec<u8>> {
    // HMAC accepts keys of any non-zero length, and SecretKey guarantees
    // non-empty, so this cannot fail in practice
    let mut mac = HmacSha256::new_from_slice(key.as_bytes()).map_err(|_| Error::EmptyKey)?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Check a supplied signature segment against the expected tag
///
/// The expected tag is Base64URL-encoded and compared against the supplied
/// segment as ASCII bytes: equal-length check first, then a constant-time
/// bytewise compare. Comparing the encoded form also rejects non-canonical
/// encodings of an otherwise correct tag.
pub(crate) fn tag_matches(key: &SecretKey, message: &[u8], signature: &str) -> Result<bool> {
    let expected = base64url::encode_bytes(&authentication_tag(key, message)?);

    if expected.len() != signature.len() {
        return Ok(false);
    }

    Ok(constant_time_eq(expected.as_bytes(), signature.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // HMAC-SHA256("key", "The quick brown fox jumps over the lazy dog"),
    // the RFC 2202-style reference vector
    const FOX_TAG_HEX: &str = "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8";

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn test_known_tag() {
        let key = SecretKey::new("key").unwrap();
        let tag =
            authentication_tag(&key, b"The quick brown fox jumps over the lazy dog").unwrap();
        assert_eq!(hex(&tag), FOX_TAG_HEX);
    }

    #[test]
    fn test_tag_is_32_bytes() {
        let key = SecretKey::new("secret").unwrap();
        let tag = authentication_tag(&key, b"message").unwrap();
        assert_eq!(tag.len(), 32);
    }

    #[test]
    fn test_tag_matches_own_output() {
        let key = SecretKey::new("secret").unwrap();
        let tag = authentication_tag(&key, b"header.payload").unwrap();
        let signature = base64url::encode_bytes(&tag);

        assert!(tag_matches(&key, b"header.payload", &signature).unwrap());
    }

    #[test]
    fn test_tag_rejects_other_key() {
        let key = SecretKey::new("secret").unwrap();
        let other = SecretKey::new("other-secret").unwrap();
        let tag = authentication_tag(&key, b"header.payload").unwrap();
        let signature = base64url::encode_bytes(&tag);

        assert!(!tag_matches(&other, b"header.payload", &signature).unwrap());
    }

    #[test]
    fn test_tag_rejects_wrong_length() {
        let key = SecretKey::new("secret").unwrap();
        assert!(!tag_matches(&key, b"header.payload", "short").unwrap());
        assert!(!tag_matches(&key, b"header.payload", "").unwrap());
    }
}
