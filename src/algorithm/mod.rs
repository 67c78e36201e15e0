//! Cryptographic primitive behind the token signature
//!
//! Exactly one algorithm is supported: HMAC with SHA-256 (`HS256`). The
//! identifier below is what the header declares; verification never reads
//! the algorithm back out of a token, it always runs this code path.

pub(crate) mod hmac;

/// Algorithm name written into every token header
pub const ALGORITHM: &str = "HS256";
