//! Secret key handling for HMAC signing and verification
//!
//! A [`SecretKey`] wraps the shared secret both sides of the exchange hold.
//! Construction rejects empty secrets up front, so every later signing or
//! verification call operates on a usable key. The secret bytes are wiped
//! from memory when the key is dropped, and the `Debug` impl never prints
//! them.

use crate::error::{Error, Result};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Symmetric secret for HMAC-SHA256 signing and verification
///
/// The library borrows the key for the duration of a call and never retains
/// or logs it.
///
/// # Examples
///
/// ```
/// use quickjwt::SecretKey;
///
/// let key = SecretKey::new("your-256-bit-secret").unwrap();
/// assert!(SecretKey::new("").is_err());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    secret: Vec<u8>,
}

impl SecretKey {
    /// Create a key from secret bytes or text
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`] if the secret is empty. Signing or
    /// verifying with a degenerate key would silently produce tokens anyone
    /// can forge, so this fails fast instead.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::EmptyKey);
        }
        Ok(Self { secret })
    }

    /// Get the secret bytes
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}
