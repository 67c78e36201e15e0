use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::token::TokenHeader;
use crate::utils::base64url;

use serde_json::Value;

/// Decode a token's payload **without verifying its signature**
///
/// # Security
///
/// This performs **no cryptographic check whatsoever**. Anyone can mint a
/// token that decodes cleanly here. Never make an authorization decision
/// from the returned claims without first calling [`verify`](crate::verify)
/// with the shared secret. The split exists because claims are often
/// inspected before the secret is available (for example, reading an
/// identifier to pick which key to verify with), but it is a footgun if the
/// verification step is forgotten.
///
/// Returns `None` for anything that is not a three-segment token with a
/// Base64URL-decodable payload holding a JSON object. Never panics on
/// untrusted input.
///
/// # Examples
///
/// ```
/// use quickjwt::{decode, sign, Claims, SecretKey};
/// use serde_json::json;
///
/// let mut claims = Claims::new();
/// claims.insert("name".to_string(), json!("John Doe"));
///
/// let key = SecretKey::new("your-256-bit-secret").unwrap();
/// let token = sign(&claims, &key).unwrap();
///
/// assert_eq!(decode(&token), Some(claims));
/// assert_eq!(decode("not-a-jwt"), None);
/// ```
pub fn decode(token: &str) -> Option<Claims> {
    extract_claims(token).ok()
}

fn extract_claims(token: &str) -> Result<Claims> {
    let payload = base64url::decode_bytes(segment(token, 1)?)?;

    let value: Value =
        serde_json::from_slice(&payload).map_err(|e| Error::InvalidJson(e.to_string()))?;

    // Claims are a mapping by definition; a payload holding any other JSON
    // value is not a claim set
    match value {
        Value::Object(claims) => Ok(claims),
        _ => Err(Error::InvalidJson(
            "payload is not a JSON object".to_string(),
        )),
    }
}

/// Decode a token's header **without verifying its signature**
///
/// Same fail-soft contract as [`decode`]: the returned header is untrusted
/// and must never be used to choose a verification algorithm.
pub fn decode_header(token: &str) -> Option<TokenHeader> {
    extract_header(token).ok()
}

fn extract_header(token: &str) -> Result<TokenHeader> {
    let header = base64url::decode_bytes(segment(token, 0)?)?;
    serde_json::from_slice(&header).map_err(|e| Error::InvalidJson(e.to_string()))
}

/// Get one of the three token segments, failing if the token does not split
/// into exactly three
fn segment(token: &str, index: usize) -> Result<&str> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(Error::InvalidFormat);
    }
    Ok(parts[index])
}
