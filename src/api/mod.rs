//! Exchange REST client
//!
//! # Overview
//!
//! [`Client`] binds the endpoint surface to one shared [`RequestExecutor`].
//! Listing calls return a lazy [`Pager`]; nothing is sent until the pager is
//! first asked for an item. Single-object calls and creates are plain async
//! functions.
//!
//! ```rust,ignore
//! let client = Client::from_config(&ClientConfig::from_env()?)?;
//!
//! let mut ledger = client.get_account_history(account_id);
//! while ledger.has_more().await {
//!     let entry = ledger.take_next()?;
//!     println!("{} {}", entry.created_at, entry.amount);
//! }
//! ```

mod accounts;
mod orders;
mod reports;

use crate::config::ClientConfig;
use crate::decode::{decode_one, json_page};
use crate::error::Result;
use crate::http::{HttpClient, Request, RequestExecutor};
use crate::pagination::{PageMode, Pager};
use crate::reconcile::Reconcile;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Client for the exchange's REST endpoints
#[derive(Clone)]
pub struct Client {
    executor: Arc<dyn RequestExecutor>,
}

impl Client {
    /// Create a client over any request executor
    pub fn new(executor: Arc<dyn RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Create a reqwest-backed client, signed when credentials are configured
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = config.to_http_config();
        let client = match config.credentials {
            Some(ref creds) => HttpClient::with_credentials(http, creds.clone())?,
            None => HttpClient::with_config(http)?,
        };
        Ok(Self::new(Arc::new(client)))
    }

    /// The executor shared by every call and pager of this client
    pub fn executor(&self) -> &Arc<dyn RequestExecutor> {
        &self.executor
    }

    /// Lazy pager over a JSON-array endpoint
    pub fn pager<T>(&self, request: Request, mode: PageMode) -> Pager<T>
    where
        T: DeserializeOwned + 'static,
    {
        Pager::new(self.executor.clone(), request, json_page::<T>, mode)
    }

    /// Send a request and decode a single JSON object
    pub async fn send_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.executor.execute(&request).await?;
        decode_one(&response.body)
    }

    /// POST `request` to `path` and reconcile the response against it.
    ///
    /// Fields the server leaves out of its answer keep the values that were
    /// sent; fields it does return win.
    pub async fn create<T>(&self, path: &str, request: &T) -> Result<T>
    where
        T: Serialize + DeserializeOwned + Reconcile,
    {
        let body = serde_json::to_string(request)?;
        debug!("Creating {} ({} bytes)", path, body.len());

        let response: T = self.send_json(Request::post(path).body(body)).await?;
        Ok(response.reconcile(request))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
