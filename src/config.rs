//! Client configuration
//!
//! `ClientConfig` can be loaded from YAML or from `GDAX_*` environment
//! variables, and turned into the transport settings for [`HttpClient`].
//!
//! ```yaml
//! endpoint: "https://api.gdax.com"
//! timeout_secs: 10
//! rate_limit:
//!   requests_per_second: 5
//!   burst_size: 10
//! credentials:
//!   key: "..."
//!   secret: "..."
//!   passphrase: "..."
//! ```
//!
//! [`HttpClient`]: crate::http::HttpClient

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "GDAX_ENDPOINT";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "GDAX_API_KEY";
/// Environment variable holding the base64 API secret
pub const ENV_API_SECRET: &str = "GDAX_API_SECRET";
/// Environment variable holding the API passphrase
pub const ENV_API_PASSPHRASE: &str = "GDAX_API_PASSPHRASE";

/// Settings for building a [`crate::Client`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the REST API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent override
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Request quota; `None` disables client-side limiting
    #[serde(default)]
    pub rate_limit: Option<RateLimiterConfig>,

    /// API credentials; without them only public endpoints work
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            rate_limit: None,
            credentials: None,
        }
    }
}

impl ClientConfig {
    /// Parse a config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: ClientConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Build a config from `GDAX_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable lookup.
    ///
    /// Credentials need all of key, secret and passphrase; setting only some
    /// of them is an error naming the first missing one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let mut config = Self::default();
        if let Some(endpoint) = get(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }

        let key = get(ENV_API_KEY);
        let secret = get(ENV_API_SECRET);
        let passphrase = get(ENV_API_PASSPHRASE);

        config.credentials = match (key, secret, passphrase) {
            (None, None, None) => None,
            (Some(key), Some(secret), Some(passphrase)) => {
                Some(Credentials::new(key, secret, passphrase))
            }
            (key, secret, _) => {
                let missing = if key.is_none() {
                    ENV_API_KEY
                } else if secret.is_none() {
                    ENV_API_SECRET
                } else {
                    ENV_API_PASSPHRASE
                };
                return Err(Error::missing_field(missing));
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Use these credentials
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(Error::invalid_value("endpoint", "cannot be empty"));
        }
        url::Url::parse(&self.endpoint)
            .map_err(|e| Error::invalid_value("endpoint", e.to_string()))?;

        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be positive"));
        }

        if let Some(ref rate) = self.rate_limit {
            if rate.requests_per_second == 0 {
                return Err(Error::invalid_value(
                    "rate_limit.requests_per_second",
                    "must be positive",
                ));
            }
        }

        if let Some(ref creds) = self.credentials {
            if creds.key.is_empty() {
                return Err(Error::missing_field("credentials.key"));
            }
            if creds.secret.is_empty() {
                return Err(Error::missing_field("credentials.secret"));
            }
            if creds.passphrase.is_empty() {
                return Err(Error::missing_field("credentials.passphrase"));
            }
        }
        Ok(())
    }

    /// Transport settings for [`crate::http::HttpClient`]
    pub fn to_http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .endpoint(&self.endpoint)
            .timeout(Duration::from_secs(self.timeout_secs));

        builder = match self.rate_limit {
            Some(rate) => builder.rate_limit(rate),
            None => builder.no_rate_limit(),
        };

        if let Some(ref agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}
