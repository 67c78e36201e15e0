//! # quickjwt - Minimal HS256 JWT Signing and Verification
//!
//! > Sign, verify, and decode JSON Web Tokens with a shared secret.
//!
//! **quickjwt** implements the three-segment JWT protocol with a single,
//! fixed algorithm: HMAC-SHA256 (`HS256`). A producer signs an arbitrary
//! claim set with a shared secret; a consumer can decode the claims without
//! the secret, and can cryptographically confirm with the secret that the
//! claims are exactly what was sealed.
//!
//! ## Overview
//!
//! A token is three unpadded Base64URL segments joined by dots:
//!
//! ```text
//! base64url(header) . base64url(payload) . base64url(HMAC-SHA256(header_b64 "." payload_b64))
//! ```
//!
//! The header is always `{"alg":"HS256","typ":"JWT"}`. The payload is the
//! caller's claim set, serialized in insertion order. Signing is a pure
//! function: the same claims and secret always yield the same token, byte
//! for byte. The library injects no timestamps and holds no state between
//! calls; every operation is synchronous, reentrant, and safe to call from
//! any number of threads.
//!
//! ## Quick Start
//!
//! ```
//! use quickjwt::{decode, sign, verify, Claims, SecretKey};
//! use serde_json::json;
//!
//! let mut claims = Claims::new();
//! claims.insert("userID".to_string(), json!("1234567890"));
//! claims.insert("name".to_string(), json!("John Doe"));
//!
//! let key = SecretKey::new("your-256-bit-secret")?;
//!
//! // Producer side: sign
//! let token = sign(&claims, &key)?;
//!
//! // Consumer side: verify, then decode
//! assert!(verify(&key, &token));
//! assert_eq!(decode(&token), Some(claims));
//! # Ok::<(), quickjwt::Error>(())
//! ```
//!
//! ## Operations
//!
//! - [`sign`]`(claims, key)` builds and signs a token. Fails only on caller
//!   mistakes (unserializable claims); see [`Error`].
//! - [`verify`]`(key, token)` checks the signature. Fails closed: any
//!   malformed or tampered input yields `false`, never a panic or an error
//!   describing what went wrong. The `(key, token)` argument order is the
//!   canonical one for this library.
//! - [`decode`]`(token)` extracts the claims **without any cryptographic
//!   check**. Pair it with [`verify`] before trusting anything it returns.
//! - [`decode_header`]`(token)` inspects the (equally untrusted) header.
//!
//! ## Security
//!
//! ### Decoding is not verification
//!
//! [`decode`] deliberately works without the secret, so claims can be
//! inspected before a key is chosen. Anyone can forge a token that decodes
//! cleanly. **Always call [`verify`] before acting on decoded claims.**
//!
//! ### Algorithm Confusion Prevention
//!
//! Verification never reads the algorithm from the attacker-controlled
//! header; HMAC-SHA256 is fixed in the verifier's own code path. A token
//! declaring `"alg":"none"` or `"alg":"RS256"` is simply a token whose
//! signature will not match.
//!
//! ### Timing Attack Protection
//!
//! Signature comparison uses the [`constant_time_eq`](https://crates.io/crates/constant_time_eq)
//! crate after an equal-length check, preventing timing-based recovery of
//! signature bytes.
//!
//! ### Secret Handling
//!
//! [`SecretKey`] rejects empty secrets at construction, wipes its bytes on
//! drop, and redacts them from `Debug` output. The library never logs,
//! caches, or retains the secret beyond the call stack.
//!
//! ## Out of Scope
//!
//! No algorithm negotiation, no asymmetric signing, no key rotation (`kid`),
//! no expiry or audience enforcement, no nested or encrypted tokens. Claims
//! like `exp` are carried verbatim; enforcing them is the caller's business.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) — JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) — JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725) — JSON Web Signature Best Practices

// Core modules
pub mod error;
pub mod utils;

// Algorithm primitive (HMAC-SHA256)
pub mod algorithm;

// Keys and claims
pub mod claims;
pub mod keys;

// Token operations (sign, verify, decode)
pub mod token;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use claims::Claims;
pub use error::{Error, Result};
pub use keys::SecretKey;
pub use token::{decode, decode_header, sign, verify, TokenHeader};
