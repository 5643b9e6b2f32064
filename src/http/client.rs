//! HTTP client with signing and rate limiting
//!
//! Provides the reqwest-backed `RequestExecutor` that handles:
//! - Endpoint + path + ordered query URL construction
//! - Request signing when credentials are configured
//! - Rate limiting to stay under the exchange's request quota
//! - Mapping non-2xx responses and timeouts to errors
//!
//! Failed calls are returned as-is; nothing is retried here.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::types::{Request, RequestExecutor, Response};
use crate::auth::{Authenticator, Credentials};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default public REST endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.gdax.com";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for all requests
    pub endpoint: String,
    /// Request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: HashMap::new(),
            user_agent: format!("gdax-rest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the endpoint
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client with signing and rate limiting
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    endpoint: Url,
    authenticator: Option<Authenticator>,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a new HTTP client for public endpoints
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let endpoint = Url::parse(&config.endpoint)?;
        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            endpoint,
            authenticator: None,
            rate_limiter,
        })
    }

    /// Create a client that signs every request with the given credentials
    pub fn with_credentials(config: HttpClientConfig, credentials: Credentials) -> Result<Self> {
        let mut client = Self::with_config(config)?;
        client.authenticator = Some(Authenticator::new(credentials)?);
        Ok(client)
    }

    /// Check if requests are signed
    pub fn is_authenticated(&self) -> bool {
        self.authenticator.is_some()
    }

    /// Map a reqwest failure, keeping timeouts distinct from other errors
    pub(crate) fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            Error::Http(err)
        }
    }

    /// Build the full URL for a request, query pairs in order
    pub fn build_url(&self, request: &Request) -> Result<Url> {
        let mut url = self.endpoint.clone();
        let base_path = url.path().trim_end_matches('/').to_string();
        let path = request.path.trim_start_matches('/');
        url.set_path(&format!("{base_path}/{path}"));

        if request.query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut()
                .clear()
                .extend_pairs(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(url)
    }
}

#[async_trait]
impl RequestExecutor for HttpClient {
    async fn execute(&self, request: &Request) -> Result<Response> {
        let url = self.build_url(request)?;

        if let Some(ref limiter) = self.rate_limiter {
            limiter.wait().await;
        }

        let mut req = self.client.request(request.method.into(), url.clone());

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            req = req
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        if let Some(ref auth) = self.authenticator {
            let path_and_query = match url.query() {
                Some(query) => format!("{}?{query}", url.path()),
                None => url.path().to_string(),
            };
            req = auth.apply(req, request.method, &path_and_query, request.body.as_deref())?;
        }

        let response = req.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;

        debug!(
            "{} {} -> {} ({} bytes)",
            request.method,
            url,
            status.as_u16(),
            body.len()
        );

        if !status.is_success() {
            return Err(Error::http_status(
                status.as_u16(),
                String::from_utf8_lossy(&body).into_owned(),
            ));
        }

        Ok(Response {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("has_authenticator", &self.authenticator.is_some())
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}
