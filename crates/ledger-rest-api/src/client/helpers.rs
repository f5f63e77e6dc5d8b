// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Internal helper methods

use super::RestApiClient;
use crate::{
    error::{check_status, RestApiError},
    responses::RestResponse,
    types::Resource,
};
use reqwest::RequestBuilder;
use tracing::debug;
use url::Url;

impl RestApiClient {
    /// Helper to append path segments to the base URL, keeping any path it already has.
    pub(super) fn path_url<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, RestApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments.into_iter().filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    /// Helper to construct `<base>/<resource>[/<item>]?<query>`.
    ///
    /// A `None` value is appended as a bare key, as the node expects for `reverse`.
    pub(super) fn resource_url(
        &self,
        resource: Resource,
        item: Option<&str>,
        query_pairs: &[(&'static str, Option<String>)],
    ) -> Result<Url, RestApiError> {
        let mut url = self.path_url([resource.path_segment()].into_iter().chain(item))?;

        // `query_pairs_mut` always leaves a `?` behind, even for zero pairs
        if !query_pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in query_pairs {
                match value {
                    Some(value) => serializer.append_pair(key, value),
                    None => serializer.append_key_only(key),
                };
            }
        }

        Ok(url)
    }

    /// Helper to execute a request and decode its JSON body.
    pub(super) async fn fetch_json(
        &self,
        request_builder: RequestBuilder,
    ) -> Result<RestResponse, RestApiError> {
        let response = request_builder.send().await?;
        debug!(url = %response.url(), status = %response.status(), "REST API response");
        let response = check_status(response).await?;
        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{QueryFilter, Resource, RestApiClient};

    fn client() -> RestApiClient {
        RestApiClient::new_with_base_url("http://10.0.0.2:8008").unwrap()
    }

    #[test]
    fn test_resource_url_without_query() {
        let url = client()
            .resource_url(Resource::Blocks, None, &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.2:8008/blocks");
    }

    #[test]
    fn test_resource_url_with_item() {
        let url = client()
            .resource_url(Resource::State, Some("1cf1266e28"), &[])
            .unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.2:8008/state/1cf1266e28");
    }

    #[test]
    fn test_resource_url_keeps_base_path() {
        for base in ["http://10.0.0.2:8008/api", "http://10.0.0.2:8008/api/"] {
            let client = RestApiClient::new_with_base_url(base).unwrap();
            let url = client
                .resource_url(Resource::Batches, Some("b1"), &[])
                .unwrap();
            assert_eq!(url.as_str(), "http://10.0.0.2:8008/api/batches/b1");
        }
    }

    #[test]
    fn test_path_url_skips_empty_segments() {
        let client = RestApiClient::new_with_base_url("http://10.0.0.2:8008/api").unwrap();
        let url = client.path_url("/peers/".split('/')).unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.2:8008/api/peers");
    }

    #[test]
    fn test_resource_url_query_string() {
        let client = client();
        let pairs = QueryFilter::new()
            .head("h1")
            .address("1cf126")
            .query_pairs(Resource::State);
        let url = client.resource_url(Resource::State, None, &pairs).unwrap();
        assert_eq!(url.query(), Some("head=h1&address=1cf126"));

        let pairs = QueryFilter::new()
            .reverse(true)
            .query_pairs(Resource::Batches);
        let url = client.resource_url(Resource::Batches, None, &pairs).unwrap();
        assert_eq!(url.as_str(), "http://10.0.0.2:8008/batches?reverse");
    }
}
