use crate::algorithm::hmac;
use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::keys::SecretKey;
use crate::token::TokenHeader;
use crate::utils::base64url;

/// Sign a claim set, producing a `header.payload.signature` token
///
/// The header is fixed to `{"alg":"HS256","typ":"JWT"}`. Claims are
/// serialized in their insertion order, so the same claim set and key always
/// produce the same token. The library injects nothing of its own: no
/// timestamps, no randomness.
///
/// # Errors
///
/// Returns [`Error::InvalidClaims`] if the claim set contains a value the
/// JSON serializer cannot represent (for example a non-finite float).
///
/// # Examples
///
/// ```
/// use quickjwt::{sign, Claims, SecretKey};
/// use serde_json::json;
///
/// let mut claims = Claims::new();
/// claims.insert("userID".to_string(), json!("1234567890"));
/// claims.insert("name".to_string(), json!("John Doe"));
///
/// let key = SecretKey::new("your-256-bit-secret").unwrap();
/// let token = sign(&claims, &key).unwrap();
/// assert_eq!(token.split('.').count(), 3);
/// ```
pub fn sign(claims: &Claims, key: &SecretKey) -> Result<String> {
    let header_json = serde_json::to_string(&TokenHeader::hs256())
        .map_err(|e| Error::InvalidClaims(e.to_string()))?;
    let payload_json =
        serde_json::to_string(claims).map_err(|e| Error::InvalidClaims(e.to_string()))?;

    let signing_input = format!(
        "{}.{}",
        base64url::encode(&header_json),
        base64url::encode(&payload_json)
    );

    let tag = hmac::authentication_tag(key, signing_input.as_bytes())?;

    Ok(format!(
        "{}.{}",
        signing_input,
        base64url::encode_bytes(&tag)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_claims() -> Claims {
        let mut claims = Claims::new();
        claims.insert("userID".to_string(), json!("1234567890"));
        claims.insert("name".to_string(), json!("John Doe"));
        claims
    }

    #[test]
    fn test_sign_produces_three_parts() {
        let key = SecretKey::new("your-256-bit-secret").unwrap();
        let token = sign(&test_claims(), &key).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_header_segment_is_fixed() {
        let key = SecretKey::new("your-256-bit-secret").unwrap();
        let token = sign(&test_claims(), &key).unwrap();

        let header_b64 = token.split('.').next().unwrap();
        assert_eq!(
            base64url::decode(header_b64).unwrap(),
            r#"{"alg":"HS256","typ":"JWT"}"#
        );
    }

    #[test]
    fn test_payload_segment_preserves_claim_order() {
        let key = SecretKey::new("your-256-bit-secret").unwrap();
        let token = sign(&test_claims(), &key).unwrap();

        let payload_b64 = token.split('.').nth(1).unwrap();
        assert_eq!(
            base64url::decode(payload_b64).unwrap(),
            r#"{"userID":"1234567890","name":"John Doe"}"#
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let key = SecretKey::new("your-256-bit-secret").unwrap();
        let first = sign(&test_claims(), &key).unwrap();
        let second = sign(&test_claims(), &key).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_claims_sign() {
        let key = SecretKey::new("secret").unwrap();
        let token = sign(&Claims::new(), &key).unwrap();

        let payload_b64 = token.split('.').nth(1).unwrap();
        assert_eq!(base64url::decode(payload_b64).unwrap(), "{}");
    }

    #[test]
    fn test_nested_claim_values() {
        let mut claims = Claims::new();
        claims.insert(
            "ctx".to_string(),
            json!({"roles": ["admin", "user"], "active": true, "score": 4.5, "note": null}),
        );

        let key = SecretKey::new("secret").unwrap();
        let token = sign(&claims, &key).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }
}
