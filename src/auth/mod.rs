//! Authentication module
//!
//! Signs private requests with the exchange's HMAC scheme.
//!
//! The `Authenticator` computes the `CB-ACCESS-*` headers for one request
//! from a set of API `Credentials`.

mod authenticator;
mod types;

pub use authenticator::{
    Authenticator, SignedHeaders, ACCESS_KEY, ACCESS_PASSPHRASE, ACCESS_SIGN, ACCESS_TIMESTAMP,
};
pub use types::Credentials;
