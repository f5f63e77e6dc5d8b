// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Helpers for integration tests against the REST API of ledger nodes.
//!
//! Wait for nodes to come up with [`poll::Poller`], drive validator and
//! transaction processor processes with [`process::ProcessCommands`], discover
//! peers with [`network`] and compare their chains with
//! [`consensus::check_for_consensus`].

#![deny(missing_docs)]
#![deny(clippy::all)]

pub mod config;
pub mod consensus;
pub mod error;
pub mod log;
pub mod network;
pub mod poll;
pub mod process;

pub use error::HarnessError;
pub use ledger_rest_api;
