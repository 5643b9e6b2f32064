//! Decoder implementations

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Trait for decoding a page body into an ordered list of items
pub trait PageDecoder<T>: Send + Sync {
    /// Decode the response body, preserving item order
    fn decode(&self, body: &[u8]) -> Result<Vec<T>>;
}

impl<T, F> PageDecoder<T> for F
where
    F: Fn(&[u8]) -> Result<Vec<T>> + Send + Sync,
{
    fn decode(&self, body: &[u8]) -> Result<Vec<T>> {
        self(body)
    }
}

/// JSON array decoder
#[derive(Debug)]
pub struct JsonPageDecoder<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonPageDecoder<T> {
    /// Create a new JSON page decoder
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonPageDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> PageDecoder<T> for JsonPageDecoder<T> {
    fn decode(&self, body: &[u8]) -> Result<Vec<T>> {
        json_page(body)
    }
}

/// Decode a JSON array body into items. An empty body is an empty page.
pub fn json_page<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse page: {e}"),
    })
}

/// Decode a single JSON object body
pub fn decode_one<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse JSON: {e}"),
    })
}
