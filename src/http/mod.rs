//! HTTP module
//!
//! Request/response descriptors, the `RequestExecutor` seam used by the
//! pager, and the reqwest-backed client that implements it.
//!
//! # Features
//!
//! - **Executor trait**: the only transport capability the core depends on
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Signing**: Integration with the auth module

mod client;
mod rate_limit;
mod types;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, DEFAULT_ENDPOINT};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use types::{Request, RequestExecutor, Response};
