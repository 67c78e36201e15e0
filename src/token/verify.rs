use crate::algorithm::hmac;
use crate::error::{Error, Result};
use crate::keys::SecretKey;

/// Verify a token's signature against a secret key
///
/// Recomputes the HMAC-SHA256 tag over the first two token segments and
/// compares it against the third using a constant-time comparison, so the
/// running time leaks nothing about where a forged signature first differs.
///
/// The algorithm is fixed by this code path and is never read from the
/// token's header, which rules out algorithm-confusion attacks where an
/// attacker-controlled `alg` field picks the verification scheme.
///
/// Verification fails closed: malformed input, undecodable segments, and
/// signature mismatches all return `false`, with no indication of which.
/// Nothing panics and nothing is thrown for untrusted input.
///
/// # Examples
///
/// ```
/// use quickjwt::{sign, verify, Claims, SecretKey};
/// use serde_json::json;
///
/// let mut claims = Claims::new();
/// claims.insert("sub".to_string(), json!("user123"));
///
/// let key = SecretKey::new("your-256-bit-secret").unwrap();
/// let token = sign(&claims, &key).unwrap();
///
/// assert!(verify(&key, &token));
/// assert!(!verify(&key, "not.a.token"));
///
/// let wrong = SecretKey::new("wrong-secret").unwrap();
/// assert!(!verify(&wrong, &token));
/// ```
pub fn verify(key: &SecretKey, token: &str) -> bool {
    check_signature(key, token).unwrap_or(false)
}

fn check_signature(key: &SecretKey, token: &str) -> Result<bool> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(Error::InvalidFormat);
    }

    let signing_input = format!("{}.{}", parts[0], parts[1]);
    hmac::tag_matches(key, signing_input.as_bytes(), parts[2])
}
