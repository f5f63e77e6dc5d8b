// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

mod batch;
mod helpers;
mod items;
mod lists;

use crate::error::RestApiError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default address of a node's REST API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8008";

/// Seconds the node may block a batch status request until the batch is committed.
pub const DEFAULT_WAIT_SECS: u64 = 300;

/// Client for the REST query interface of a ledger node.
///
/// Every call issues exactly one request (two for [`RestApiClient::post_batch`])
/// and returns the decoded JSON body. HTTP errors and malformed bodies are
/// returned to the caller unchanged; nothing is retried at this layer.
///
/// # Examples
///
/// ```rust,no_run
/// use ledger_rest_api::{QueryFilter, RestApiClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = RestApiClient::new()?;
///
///     let state = client
///         .get_state_list(&QueryFilter::new().address("000000"))
///         .await?;
///     println!("Settings: {state}");
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct RestApiClient {
    client: Client,
    base_url: Url,
    wait: Duration,
}

impl RestApiClient {
    /// Creates a new client for the REST API on the local host.
    ///
    /// # Errors
    ///
    /// This function may fail if the `reqwest` client cannot be built.
    pub fn new() -> Result<Self, RestApiError> {
        Self::new_with_options(DEFAULT_BASE_URL, Duration::from_secs(DEFAULT_WAIT_SECS))
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Address of the REST API, e.g. `http://10.0.0.2:8008`.
    ///
    /// # Errors
    ///
    /// Returns a `RestApiError` if the `reqwest` client cannot be built
    /// or if the provided base URL is invalid.
    pub fn new_with_base_url(base_url: impl reqwest::IntoUrl) -> Result<Self, RestApiError> {
        Self::new_with_options(base_url, Duration::from_secs(DEFAULT_WAIT_SECS))
    }

    /// Creates a new client with a custom base URL and submission wait.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Address of the REST API.
    /// * `wait` - How long the node may hold a batch status request, see
    ///   [`RestApiClient::post_batch`]. Sent with second granularity.
    ///
    /// # Errors
    ///
    /// Returns a `RestApiError` if the `reqwest` client cannot be built
    /// or if the provided base URL is invalid.
    pub fn new_with_options(
        base_url: impl reqwest::IntoUrl,
        wait: Duration,
    ) -> Result<Self, RestApiError> {
        Self::new_with_client(Client::builder().build()?, base_url, wait)
    }

    /// Creates a new client on top of a configured `reqwest` client,
    /// e.g. one with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns a `RestApiError` if the provided base URL is invalid.
    pub fn new_with_client(
        client: Client,
        base_url: impl reqwest::IntoUrl,
        wait: Duration,
    ) -> Result<Self, RestApiError> {
        Ok(RestApiClient {
            client,
            base_url: base_url.into_url()?,
            wait,
        })
    }

    /// The base URL all request paths are appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The submission wait sent with batch status requests.
    pub fn wait(&self) -> Duration {
        self.wait
    }
}
