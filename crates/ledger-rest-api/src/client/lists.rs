// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Filtered collection listings

use super::RestApiClient;
use crate::{
    error::RestApiError,
    responses::RestResponse,
    types::{QueryFilter, Resource},
};

impl RestApiClient {
    /// GET /<resource>?<query>
    /// Lists a collection, sending the parameters selected by [`QueryFilter::query_pairs`].
    ///
    /// # Errors
    ///
    /// Returns a `RestApiError` if the request fails, the status is not a success
    /// or the body is not JSON.
    pub async fn list(
        &self,
        resource: Resource,
        filter: &QueryFilter,
    ) -> Result<RestResponse, RestApiError> {
        let url = self.resource_url(resource, None, &filter.query_pairs(resource))?;
        self.fetch_json(self.client.get(url)).await
    }

    /// GET /blocks
    /// Lists blocks. `count` is not honored.
    pub async fn get_blocks(&self, filter: &QueryFilter) -> Result<RestResponse, RestApiError> {
        self.list(Resource::Blocks, filter).await
    }

    /// GET /batches
    /// Lists batches. `count` is not honored.
    pub async fn get_batches(&self, filter: &QueryFilter) -> Result<RestResponse, RestApiError> {
        self.list(Resource::Batches, filter).await
    }

    /// GET /transactions
    /// Lists transactions.
    pub async fn get_transactions(
        &self,
        filter: &QueryFilter,
    ) -> Result<RestResponse, RestApiError> {
        self.list(Resource::Transactions, filter).await
    }

    /// GET /state
    /// Lists state entries; the filter's id is sent as `address`.
    pub async fn get_state_list(
        &self,
        filter: &QueryFilter,
    ) -> Result<RestResponse, RestApiError> {
        self.list(Resource::State, filter).await
    }
}
