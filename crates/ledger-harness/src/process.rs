// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Validator and transaction processor lifecycle
//!
//! Command lines are run through `sh -c`, so they may use pipes and command
//! substitution like the default stop commands do.

use crate::error::HarnessError;
use serde::{Deserialize, Serialize};
use std::{
    path::Path,
    process::{ExitStatus, Output, Stdio},
};
use tokio::process::{Child, Command};
use tracing::{info, warn};

/// Shell command lines driving the node processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessCommands {
    /// Starts the validator
    pub validator_start: String,
    /// Kills the validator
    pub validator_stop: String,
    /// Starts the settings transaction processor
    pub settings_tp_start: String,
    /// Kills the settings transaction processor
    pub settings_tp_stop: String,
    /// Writes `config-genesis.batch` into the genesis directory
    pub genesis_batch: String,
    /// Builds the genesis block from `config-genesis.batch`
    pub genesis: String,
}

impl Default for ProcessCommands {
    fn default() -> Self {
        Self {
            validator_start: "sudo -u sawtooth sawtooth-validator -vv".into(),
            validator_stop: kill_command("sawtooth-validator"),
            settings_tp_start: "sudo -u sawtooth settings-tp -vv".into(),
            settings_tp_stop: kill_command("settings-tp"),
            genesis_batch: "sawset genesis --force".into(),
            genesis: "sawadm genesis config-genesis.batch".into(),
        }
    }
}

fn kill_command(process_name: &str) -> String {
    format!("sudo kill -9 $(ps aux | grep '{process_name}' | awk '{{print $2}}')")
}

fn shell(cmd: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(cmd);
    command
}

/// Spawn `cmd` without waiting for it.
pub fn spawn(cmd: &str, stderr: Stdio) -> Result<Child, HarnessError> {
    shell(cmd)
        .stdin(Stdio::null())
        .stderr(stderr)
        .spawn()
        .map_err(|source| HarnessError::Spawn {
            command: cmd.to_string(),
            source,
        })
}

async fn output(cmd: &str, dir: Option<&Path>) -> Result<Output, HarnessError> {
    let mut command = shell(cmd);
    if let Some(dir) = dir {
        command.current_dir(dir);
    }
    command
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| HarnessError::Spawn {
            command: cmd.to_string(),
            source,
        })
}

/// Run `cmd` to completion in `dir` and require a successful exit.
pub async fn run_checked(cmd: &str, dir: Option<&Path>) -> Result<Output, HarnessError> {
    let output = output(cmd, dir).await?;
    if output.status.success() {
        Ok(output)
    } else {
        Err(HarnessError::CommandFailed {
            command: cmd.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// Log and run `cmd`, failing on a non-zero exit.
pub async fn send_cmd(cmd: &str) -> Result<(), HarnessError> {
    info!("Sending {cmd}");
    run_checked(cmd, None).await.map(|_| ())
}

/// Run `cmd` and return its standard output, trimmed and with `'` turned into `"`.
pub async fn run_peer_command(cmd: &str) -> Result<String, HarnessError> {
    let output = run_checked(cmd, None).await?;
    Ok(normalize_output(&String::from_utf8_lossy(&output.stdout)))
}

/// Trims `output` and replaces single quotes with double quotes,
/// which turns Python style lists into JSON.
pub fn normalize_output(output: &str) -> String {
    output.trim().replace('\'', "\"")
}

impl ProcessCommands {
    /// Start the validator; the returned child is not waited for.
    pub fn start_validator(&self, stderr: Stdio) -> Result<Child, HarnessError> {
        info!("Starting the validator");
        spawn(&self.validator_start, stderr)
    }

    /// Kill the validator.
    ///
    /// The exit status is returned but not checked: the kill pipeline also
    /// matches its own `grep` and usually reports a failure for it.
    pub async fn stop_validator(&self) -> Result<ExitStatus, HarnessError> {
        info!("Stopping the validator");
        Ok(output(&self.validator_stop, None).await?.status)
    }

    /// Start the settings transaction processor; the returned child is not waited for.
    pub fn start_settings_tp(&self, stderr: Stdio) -> Result<Child, HarnessError> {
        info!("Starting settings-tp");
        spawn(&self.settings_tp_start, stderr)
    }

    /// Kill the settings transaction processor, see [`ProcessCommands::stop_validator`].
    pub async fn stop_settings_tp(&self) -> Result<ExitStatus, HarnessError> {
        info!("Stopping the settings-tp");
        Ok(output(&self.settings_tp_stop, None).await?.status)
    }

    /// Write the config genesis batch in `dir`.
    pub async fn create_genesis_batch(&self, dir: &Path) -> Result<(), HarnessError> {
        info!("creating the config genesis batch");
        run_checked(&self.genesis_batch, Some(dir)).await.map(|_| ())
    }

    /// Create the genesis batch and then the genesis block in `dir`.
    pub async fn create_genesis(&self, dir: &Path) -> Result<(), HarnessError> {
        info!("creating the genesis data");
        self.create_genesis_batch(dir).await?;
        run_checked(&self.genesis, Some(dir)).await.map(|_| ())
    }
}

/// Remove all regular files directly inside the validator data directory.
///
/// Files that cannot be removed are logged and skipped.
///
/// # Returns
///
/// The number of removed files.
pub fn delete_genesis(data_dir: &Path) -> Result<usize, HarnessError> {
    let mut removed = 0;
    for entry in std::fs::read_dir(data_dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(e) => {
                warn!("Failed to read entry of {}: {e}", data_dir.display());
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => warn!("Failed to remove {}: {e}", path.display()),
        }
    }
    info!("Removed {removed} files from {}", data_dir.display());
    Ok(removed)
}
