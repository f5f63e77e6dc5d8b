// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Waiting for REST APIs to become available

use crate::config::PollConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tokio::time::sleep;
use tracing::debug;

/// Default number of attempts.
pub const DEFAULT_TRIES: u32 = 5;

/// Default time unit of the linear backoff.
pub const DEFAULT_UNIT: Duration = Duration::from_secs(1);

/// Default timeout of a single attempt.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors of the availability poller
#[derive(Error, Debug)]
pub enum PollError {
    /// The expected status was not seen within the attempt budget.
    #[error("{url} is not available within {attempts} attempts")]
    Unavailable {
        /// The polled URL
        url: String,
        /// Number of attempts made
        attempts: u32,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Delay after failed attempt `attempt` (1-indexed): `2 * attempt` units.
pub fn backoff_delay(attempt: u32, unit: Duration) -> Duration {
    unit.saturating_mul(attempt.saturating_mul(2))
}

/// Prefixes `http://` unless the endpoint already carries a scheme.
pub fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{endpoint}")
    }
}

/// Polls URLs until they answer with an expected status.
///
/// Attempts run one after another. After failed attempt *k* the poller sleeps
/// [`backoff_delay`]`(k)` if another attempt remains, so `tries` failures take
/// `2 + 4 + ... + 2 * (tries - 1)` units in total.
#[derive(Debug, Clone)]
pub struct Poller {
    client: Client,
    tries: u32,
    unit: Duration,
}

impl Poller {
    /// Create a poller with `tries` attempts, backoff `unit` and a timeout per attempt.
    pub fn new(tries: u32, unit: Duration, request_timeout: Duration) -> Result<Self, PollError> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            client,
            tries,
            unit,
        })
    }

    /// Create a poller from the `poll` section of the configuration.
    pub fn from_config(config: &PollConfig) -> Result<Self, PollError> {
        Self::new(
            config.tries,
            Duration::from_millis(config.unit_ms),
            Duration::from_millis(config.request_timeout_ms),
        )
    }

    /// Create a poller with the default budget of five attempts.
    pub fn with_defaults() -> Result<Self, PollError> {
        Self::new(DEFAULT_TRIES, DEFAULT_UNIT, DEFAULT_REQUEST_TIMEOUT)
    }

    /// The attempt budget.
    pub fn tries(&self) -> u32 {
        self.tries
    }

    /// Pause until `url` answers with `status_code`.
    ///
    /// An error status counts as success if it is the expected one, so this
    /// can also wait for a deliberate error state. Any other status and any
    /// transport error (refused connection, timeout, DNS failure) consume the
    /// attempt.
    ///
    /// # Returns
    ///
    /// The number of attempts it took.
    ///
    /// # Errors
    ///
    /// [`PollError::Unavailable`] once the attempt budget is exhausted.
    pub async fn wait_until_status(
        &self,
        url: &str,
        status_code: StatusCode,
    ) -> Result<u32, PollError> {
        for attempt in 1..=self.tries {
            match self.client.get(url).send().await {
                Ok(response) if response.status() == status_code => {
                    debug!(url, attempt, "Got status {status_code}");
                    return Ok(attempt);
                }
                Ok(response) => {
                    debug!("failed to read url: {url}: status {}", response.status());
                }
                Err(err) => {
                    debug!("failed to read url: {url}: {err}");
                }
            }

            if attempt < self.tries {
                let sleep_time = backoff_delay(attempt, self.unit);
                debug!("Retrying in {sleep_time:?}");
                sleep(sleep_time).await;
            }
        }

        Err(PollError::Unavailable {
            url: url.to_string(),
            attempts: self.tries,
        })
    }

    /// Pause until every endpoint serves `/blocks` with status 200.
    ///
    /// Endpoints are `host:port` strings or URLs and are waited for in order.
    /// The first endpoint that exhausts its budget ends the wait with an error.
    pub async fn wait_for_rest_apis<S: AsRef<str>>(&self, endpoints: &[S]) -> Result<(), PollError> {
        for endpoint in endpoints {
            let url = normalize_endpoint(endpoint.as_ref());
            self.wait_until_status(&format!("{url}/blocks"), StatusCode::OK)
                .await?;
        }
        Ok(())
    }
}
