// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Single item lookups

use super::RestApiClient;
use crate::{
    error::RestApiError,
    responses::{take_field, RestResponse},
    types::Resource,
};

impl RestApiClient {
    /// GET /batches/{batch_id}
    /// Retrieves a single batch. The whole response body is returned.
    pub async fn get_batch(&self, batch_id: &str) -> Result<RestResponse, RestApiError> {
        let url = self.resource_url(Resource::Batches, Some(batch_id), &[])?;
        self.fetch_json(self.client.get(url)).await
    }

    /// GET /transactions/{transaction_id}
    /// Retrieves a single transaction and returns the `data` member of the response.
    ///
    /// # Errors
    ///
    /// Returns [`RestApiError::MissingField`] if the response has no `data` member,
    /// besides the errors of any other request.
    pub async fn get_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<RestResponse, RestApiError> {
        let url = self.resource_url(Resource::Transactions, Some(transaction_id), &[])?;
        let response = self.fetch_json(self.client.get(url)).await?;
        take_field(response, "data")
    }

    /// GET /state/{address}
    /// Retrieves the state entry at `address`. The whole response body is returned.
    pub async fn get_state(&self, address: &str) -> Result<RestResponse, RestApiError> {
        let url = self.resource_url(Resource::State, Some(address), &[])?;
        self.fetch_json(self.client.get(url)).await
    }

    /// GET {path}
    /// Queries an arbitrary path below the base URL, e.g. `/peers` or
    /// `/batch_statuses?id=...`.
    pub async fn query(&self, path: &str) -> Result<RestResponse, RestApiError> {
        let (path, query) = match path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path, None),
        };
        let mut url = self.path_url(path.split('/'))?;
        url.set_query(query);
        self.fetch_json(self.client.get(url)).await
    }
}
