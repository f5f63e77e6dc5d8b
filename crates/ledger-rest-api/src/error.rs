// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

use reqwest::{Response, StatusCode};
use thiserror::Error;

/// Represents all possible errors that can occur when querying the ledger REST API.
#[derive(Error, Debug)]
pub enum RestApiError {
    /// Wraps an underlying reqwest error (connection refused, timeout, DNS, ...).
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Wraps a URL parsing error.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Wraps a Serde JSON error.
    #[error("Serde JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The REST API answered with a non-success status.
    #[error("API Error: Status={status}, URL={url}, Body={body}")]
    ApiError {
        /// HTTP status code returned by the API.
        status: StatusCode,
        /// The requested URL.
        url: String,
        /// The response body, usually a JSON error object.
        body: String,
    },

    /// A field the caller relies on is absent from the response body.
    #[error("Response is missing the '{0}' field")]
    MissingField(&'static str),
}

/// Checks the response status and returns an ApiError if it is not a success status.
pub(crate) async fn check_status(response: Response) -> Result<Response, RestApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".into());
        Err(RestApiError::ApiError { status, url, body })
    }
}
