// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # gdax-rest
//!
//! Async client for the GDAX exchange REST API.
//!
//! ## Features
//!
//! - **Lazy Cursor Pagination**: every listing is a [`Pager`] that fetches one
//!   page at a time, following the `CB-AFTER` header
//! - **Create Reconciliation**: order and report creation return the server's
//!   object with the submitted fields filled back in
//! - **Request Signing**: HMAC-SHA256 `CB-ACCESS-*` headers for private endpoints
//! - **Rate Limiting**: token bucket in front of every request
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gdax_rest::{Client, ClientConfig, Order, Side};
//!
//! #[tokio::main]
//! async fn main() -> gdax_rest::Result<()> {
//!     let client = Client::from_config(&ClientConfig::from_env()?)?;
//!
//!     let mut accounts = client.get_accounts();
//!     while accounts.has_more().await {
//!         let account = accounts.take_next()?;
//!         println!("{} {}", account.currency, account.available);
//!     }
//!
//!     let order = client
//!         .place_limit_order(Order::limit(Side::Buy, "BTC-USD", 100.0, 0.01))
//!         .await?;
//!     println!("placed {:?}", order.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       api::Client                         │
//! │  listings → Pager<T>        creates → reconciled T        │
//! └───────────────────────────────────────────────────────────┘
//!                               │
//! ┌────────────┬────────────────┴──┬────────────┬────────────┐
//! │ pagination │     reconcile     │   decode   │   model    │
//! ├────────────┴───────────────────┴────────────┴────────────┤
//! │              http::RequestExecutor (HttpClient)           │
//! │          auth signing · rate limit · reqwest              │
//! └───────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Request signing
pub mod auth;

/// HTTP transport with signing and rate limiting
pub mod http;

/// Response body decoders
pub mod decode;

/// Lazy cursor pagination
pub mod pagination;

/// Request/response reconciliation
pub mod reconcile;

/// Exchange entities
pub mod model;

/// Endpoint surface
pub mod api;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::Client;
pub use auth::Credentials;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use http::{HttpClient, Request, RequestExecutor, Response};
pub use model::*;
pub use pagination::{PageMode, Pager, PagerState};
pub use reconcile::Reconcile;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
