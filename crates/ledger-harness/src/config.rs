// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Configuration handling

use crate::{error::HarnessError, process::ProcessCommands};
use config::{Config, Environment, File};
use ledger_rest_api::{DEFAULT_BASE_URL, DEFAULT_WAIT_SECS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Prefix of environment variables overriding the configuration,
/// e.g. `LEDGER_HARNESS_REST_API_URL` or `LEDGER_HARNESS_POLL__TRIES`.
pub const ENV_PREFIX: &str = "LEDGER_HARNESS";

/// Main harness configuration container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// REST API of the node under test
    pub rest_api_url: String,
    /// Seconds the node may hold a batch status request after a submission
    pub wait_secs: u64,
    /// Availability poller settings
    pub poll: PollConfig,
    /// Validator data directory holding the genesis and chain files
    pub data_dir: PathBuf,
    /// Working directory of the genesis commands
    pub genesis_dir: PathBuf,
    /// Command line client used to list peers
    pub peer_cli: String,
    /// Process lifecycle command lines
    pub commands: ProcessCommands,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            rest_api_url: DEFAULT_BASE_URL.to_string(),
            wait_secs: DEFAULT_WAIT_SECS,
            poll: PollConfig::default(),
            data_dir: PathBuf::from("/var/lib/sawtooth"),
            genesis_dir: PathBuf::from("."),
            peer_cli: "sawtooth".to_string(),
            commands: ProcessCommands::default(),
        }
    }
}

/// Availability poller settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Number of attempts
    pub tries: u32,
    /// Backoff unit in milliseconds; attempt `k` is followed by `2 * k` units
    pub unit_ms: u64,
    /// Timeout of a single attempt in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            tries: 5,
            unit_ms: 1000,
            request_timeout_ms: 10_000,
        }
    }
}

impl HarnessConfig {
    /// Loads the configuration.
    ///
    /// Layers, later ones winning:
    /// 1. the defaults
    /// 2. the file at `path`, or the optional `config/default.{toml,yaml,json}`
    /// 3. environment variables prefixed with [`ENV_PREFIX`], nested keys separated by `__`
    pub fn load(path: Option<&Path>) -> Result<Self, HarnessError> {
        trace!("Loading config");
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("config/default").required(false),
        };

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
rest_api_url = "http://10.0.0.7:8008"
wait_secs = 30

[poll]
tries = 9

[commands]
validator_start = "sawtooth-validator -v"
"#
        )
        .unwrap();

        let config = HarnessConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.rest_api_url, "http://10.0.0.7:8008");
        assert_eq!(config.wait_secs, 30);
        assert_eq!(config.poll.tries, 9);
        // untouched keys keep their defaults
        assert_eq!(config.poll.unit_ms, 1000);
        assert_eq!(config.commands.validator_start, "sawtooth-validator -v");
        assert_eq!(
            config.commands.settings_tp_start,
            ProcessCommands::default().settings_tp_start
        );
    }

    #[test]
    fn test_missing_required_file() {
        let result = HarnessConfig::load(Some(Path::new("/nonexistent/harness.toml")));
        assert!(matches!(result, Err(HarnessError::Config(_))));
    }
}
