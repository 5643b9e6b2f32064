//! Request/response descriptors and the executor trait
//!
//! The pager and the creation surface only ever talk to a [`RequestExecutor`].
//! [`super::HttpClient`] is the reqwest-backed implementation; tests plug in
//! scripted executors.

use crate::error::{Error, Result};
use crate::types::{query_string, Method, QueryPairs};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// One call against the service: method, path, ordered query pairs and body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Path relative to the service endpoint, e.g. `/accounts`
    pub path: String,
    /// Query parameters, in the order they are sent
    pub query: QueryPairs,
    /// Serialized JSON body
    pub body: Option<String>,
}

impl Request {
    /// Create a request with no query and no body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Create a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Create a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter only when the value is non-empty
    #[must_use]
    pub fn query_non_empty(self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if value.is_empty() {
            self
        } else {
            self.query(key, value)
        }
    }

    /// Set the serialized JSON body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Query rendered as `k=v&k=v`
    pub fn query_string(&self) -> String {
        query_string(&self.query)
    }

    /// Path with the query string attached, as signed and sent
    pub fn path_and_query(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{query}", self.path)
        }
    }
}

/// A completed call: status, headers and raw body
#[derive(Debug, Clone, Default)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers (the pagination cursor lives here)
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Bytes,
}

impl Response {
    /// Create a 200 response with the given body
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Attach a header. Invalid names or values are ignored.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Look up a header value by name (case-insensitive).
    ///
    /// Values that are not visible ASCII read as absent; use
    /// [`Response::try_header`] where that must be an error.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Look up a header value, failing on a value that is not visible ASCII
    pub fn try_header(&self, name: &str) -> Result<Option<&str>> {
        self.headers
            .get(name)
            .map(|value| {
                value
                    .to_str()
                    .map_err(|_| Error::decode(format!("Invalid {name} header: {value:?}")))
            })
            .transpose()
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP call against the service.
///
/// Implementations must be safe to share between independent pagers.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Execute the request. Non-2xx responses are reported as errors.
    async fn execute(&self, request: &Request) -> Result<Response>;
}
