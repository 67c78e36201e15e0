//! Claim set carried in the token payload
//!
//! Claims are an ordered mapping from string keys to arbitrary JSON values
//! (strings, numbers, booleans, null, nested objects and arrays). The
//! mapping keeps caller-provided insertion order, and [`sign`](crate::sign)
//! serializes it exactly as given, so signing the same claims twice produces
//! byte-identical tokens.

use serde_json::{Map, Value};

/// Ordered mapping of claim names to JSON values
///
/// # Examples
///
/// ```
/// use quickjwt::Claims;
/// use serde_json::json;
///
/// let mut claims = Claims::new();
/// claims.insert("userID".to_string(), json!("1234567890"));
/// claims.insert("name".to_string(), json!("John Doe"));
/// ```
pub type Claims = Map<String, Value>;
