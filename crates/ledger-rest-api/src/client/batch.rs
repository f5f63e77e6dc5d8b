// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Batch submission

use super::RestApiClient;
use crate::{
    error::RestApiError,
    responses::{take_field, RestResponse},
    types::Resource,
};
use reqwest::header;
use tracing::debug;

impl RestApiClient {
    /// POST /batches
    /// Submits serialized batches and waits for the node to commit them.
    ///
    /// The node answers the submission with a status `link`. That link is
    /// requested with `&wait=<seconds>` appended verbatim, which makes the node
    /// hold the request until the batches are committed or the wait elapses.
    ///
    /// # Arguments
    ///
    /// * `batch` - A serialized batch list.
    ///
    /// # Returns
    ///
    /// The body of the batch status response.
    ///
    /// # Errors
    ///
    /// Returns [`RestApiError::MissingField`] if the submission response has no
    /// string `link`, or any error of the two requests.
    pub async fn post_batch(&self, batch: Vec<u8>) -> Result<RestResponse, RestApiError> {
        let url = self.resource_url(Resource::Batches, None, &[])?;
        let request_builder = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(batch);
        let submitted = self.fetch_json(request_builder).await?;

        let link = match take_field(submitted, "link")? {
            serde_json::Value::String(link) => link,
            _ => return Err(RestApiError::MissingField("link")),
        };
        let status_url = format!("{link}&wait={}", self.wait.as_secs());
        debug!(%status_url, "Waiting for batch commit");

        self.fetch_json(self.client.get(status_url)).await
    }
}
