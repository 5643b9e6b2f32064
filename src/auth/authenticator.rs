//! Authenticator implementation
//!
//! Computes the signature headers for a single request:
//! base64(HMAC-SHA256(decoded secret, timestamp + METHOD + path?query + body)).

use super::types::Credentials;
use crate::error::{Error, Result};
use crate::types::Method;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::RequestBuilder;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the API key
pub const ACCESS_KEY: &str = "CB-ACCESS-KEY";
/// Header carrying the request signature
pub const ACCESS_SIGN: &str = "CB-ACCESS-SIGN";
/// Header carrying the signing timestamp (seconds since epoch)
pub const ACCESS_TIMESTAMP: &str = "CB-ACCESS-TIMESTAMP";
/// Header carrying the key passphrase
pub const ACCESS_PASSPHRASE: &str = "CB-ACCESS-PASSPHRASE";

/// The four headers attached to a signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub key: String,
    pub signature: String,
    pub timestamp: String,
    pub passphrase: String,
}

/// Authenticator handles applying request signatures
pub struct Authenticator {
    credentials: Credentials,
    secret: Vec<u8>,
}

impl Authenticator {
    /// Create an authenticator, decoding the base64 secret up front
    pub fn new(credentials: Credentials) -> Result<Self> {
        let secret = STANDARD
            .decode(credentials.secret.trim())
            .map_err(|e| Error::auth(format!("API secret is not valid base64: {e}")))?;
        Ok(Self {
            credentials,
            secret,
        })
    }

    /// The credentials this authenticator signs with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign a prehash message and return the base64 signature
    pub fn sign(&self, message: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| Error::auth(format!("Invalid HMAC key: {e}")))?;
        mac.update(message.as_bytes());
        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }

    /// Build the signature headers for a request at the given timestamp.
    ///
    /// `path_and_query` must be exactly what goes on the wire.
    pub fn headers_at(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<&str>,
        timestamp: i64,
    ) -> Result<SignedHeaders> {
        let timestamp = timestamp.to_string();
        let message = format!("{timestamp}{method}{path_and_query}{}", body.unwrap_or(""));

        Ok(SignedHeaders {
            key: self.credentials.key.clone(),
            signature: self.sign(&message)?,
            timestamp,
            passphrase: self.credentials.passphrase.clone(),
        })
    }

    /// Apply signature headers, stamped with the current time, to a request builder
    pub fn apply(
        &self,
        req: RequestBuilder,
        method: Method,
        path_and_query: &str,
        body: Option<&str>,
    ) -> Result<RequestBuilder> {
        let signed = self.headers_at(method, path_and_query, body, Utc::now().timestamp())?;
        Ok(req
            .header(ACCESS_KEY, signed.key)
            .header(ACCESS_SIGN, signed.signature)
            .header(ACCESS_TIMESTAMP, signed.timestamp)
            .header(ACCESS_PASSPHRASE, signed.passphrase))
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}
