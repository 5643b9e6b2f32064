//! Credential types
//!
//! API key, base64 secret and passphrase as issued by the exchange.

use serde::{Deserialize, Serialize};
use std::fmt;

/// API credentials for signing private requests
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// API key
    pub key: String,
    /// Base64-encoded API secret
    pub secret: String,
    /// Passphrase chosen when the key was created
    pub passphrase: String,
}

impl Credentials {
    /// Create a new set of credentials
    pub fn new(
        key: impl Into<String>,
        secret: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            passphrase: passphrase.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}
