// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Ledger REST API Client
//!
//! This crate provides a thin client for the HTTP query interface of a ledger
//! node: blocks, batches, transactions and state, plus batch submission.
//!
//! Create a [`RestApiClient`] and pass a [`QueryFilter`] to the list fetchers.
//!
//! Example
//! ```rust,no_run
//! use ledger_rest_api::{QueryFilter, RestApiClient, RestApiError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), RestApiError> {
//!    let client = RestApiClient::new_with_base_url("http://127.0.0.1:8008")?;
//!
//!    // The ten most recent blocks
//!    let blocks = client.get_blocks(&QueryFilter::new().limit(10)).await?;
//!    println!("{blocks:#}");
//!
//!    Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]

mod client;
mod error;
mod responses;
mod types;

// Re-export public items
pub use client::{RestApiClient, DEFAULT_BASE_URL, DEFAULT_WAIT_SECS};
pub use error::RestApiError;
pub use responses::{take_field, RestResponse};
pub use types::{QueryFilter, Resource};
