use crate::algorithm::ALGORITHM;

use serde::{Deserialize, Serialize};

/// JWT header structure
///
/// The header this library writes is fixed: `{"alg":"HS256","typ":"JWT"}`.
/// Field declaration order matches serialization order, which keeps the
/// encoded header segment byte-stable across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenHeader {
    /// Algorithm used for signing
    #[serde(rename = "alg")]
    pub algorithm: String,

    /// Token type (always "JWT")
    #[serde(rename = "typ")]
    pub token_type: String,
}

impl TokenHeader {
    /// The fixed header written into every signed token
    pub(crate) fn hs256() -> Self {
        Self {
            algorithm: ALGORITHM.to_string(),
            token_type: "JWT".to_string(),
        }
    }

    /// Get algorithm as string
    pub fn algorithm_str(&self) -> &str {
        &self.algorithm
    }
}
