//! Error types for token creation and decoding
//!
//! Errors split into two families with different propagation rules:
//!
//! - Errors caused by untrusted token input (`InvalidFormat`, `InvalidBase64`,
//!   `InvalidJson`) never escape [`verify`](crate::verify) or
//!   [`decode`](crate::decode). Those operations collapse every failure into
//!   `false` / `None`, because rejecting garbage input is their normal job,
//!   not an exceptional condition. A caller must not be able to tell *why*
//!   a token was rejected.
//! - Errors caused by caller mistakes (`InvalidClaims`, `EmptyKey`) surface
//!   as `Err` from [`sign`](crate::sign) and
//!   [`SecretKey::new`](crate::SecretKey::new).

/// Errors that can occur while building or decoding a token
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Token is not three Base64URL parts separated by '.'
    InvalidFormat,

    /// Base64URL decoding failed
    InvalidBase64(String),

    /// JSON parsing failed
    InvalidJson(String),

    /// Claim set contains a value the JSON serializer cannot represent
    InvalidClaims(String),

    /// Secret is empty; signing or verifying with a degenerate key is refused
    EmptyKey,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFormat => write!(
                f,
                "Invalid JWT format: expected three Base64URL parts separated by '.'"
            ),
            Error::InvalidBase64(msg) => write!(f, "Base64URL decoding failed: {msg}"),
            Error::InvalidJson(msg) => write!(f, "JSON parsing failed: {msg}"),
            Error::InvalidClaims(msg) => write!(f, "Claims cannot be serialized: {msg}"),
            Error::EmptyKey => write!(f, "Secret must not be empty"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for quickjwt operations
pub type Result<T> = std::result::Result<T, Error>;
