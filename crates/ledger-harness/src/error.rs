// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Error types of the harness

use crate::poll::PollError;
use ledger_rest_api::RestApiError;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while driving nodes and their processes.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Wraps a standard I/O error.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// A shell command could not be started.
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        /// The command line
        command: String,
        /// Reason for the error
        #[source]
        source: std::io::Error,
    },

    /// A shell command exited unsuccessfully.
    #[error("Command `{command}` failed with {status}: {stderr}")]
    CommandFailed {
        /// The command line
        command: String,
        /// Exit status of the command
        status: ExitStatus,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The peer listing command printed something unexpected.
    #[error("Unexpected peer list output: {0}")]
    PeerOutput(String),

    /// Loading the configuration failed.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A REST API request failed.
    #[error(transparent)]
    RestApi(#[from] RestApiError),

    /// A node did not become available.
    #[error(transparent)]
    Poll(#[from] PollError),
}
