// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Drive a ledger node under test from the command line

#![deny(missing_docs)]
#![deny(clippy::all)]

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use ledger_harness::{
    config::HarnessConfig,
    consensus::check_for_consensus,
    log::{setup_logging, LogLevelParser},
    network::{get_node_chains, get_node_list, get_peers_list, PeerFormat},
    poll::Poller,
    process::delete_genesis,
};
use ledger_rest_api::{QueryFilter, RestApiClient, RestResponse};
use reqwest::StatusCode;
use std::{path::PathBuf, process::Stdio, time::Duration};
use tracing::{error, info, level_filters::LevelFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    /// Configuration file, defaults to the optional `config/default.{toml,yaml,json}`
    #[arg(long, global = true, env = "LEDGER_HARNESS_CONFIG")]
    config: Option<PathBuf>,
    /// REST API of the node under test, overrides the configuration
    #[arg(long, global = true)]
    url: Option<String>,
    /// Log level for the log output.
    /// Valid values are: `off`, `error`, `warn`, `info`, `debug`, `trace`
    #[clap(long, global = true, default_value_t = LevelFilter::WARN, value_parser = LogLevelParser)]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Subcommand, Debug)]
enum SubCommands {
    /// Wait until every endpoint serves `/blocks`
    Wait {
        /// REST API endpoints, a missing scheme means `http://`
        #[arg(required = true)]
        endpoints: Vec<String>,
        /// Number of attempts per endpoint
        #[arg(long)]
        tries: Option<u32>,
    },
    /// Wait until a URL answers with a given status
    WaitStatus {
        /// URL to poll
        url: String,
        /// Expected HTTP status code
        #[arg(long, default_value_t = 200)]
        status: u16,
        /// Number of attempts
        #[arg(long)]
        tries: Option<u32>,
    },
    /// List blocks
    Blocks(ListArgs),
    /// List batches
    Batches(ListArgs),
    /// List transactions
    Transactions(ListArgs),
    /// List state entries
    State(ListArgs),
    /// Show a batch
    Batch {
        /// Batch header signature
        batch_id: String,
    },
    /// Show a transaction
    Transaction {
        /// Transaction header signature
        transaction_id: String,
    },
    /// Show a state entry
    StateEntry {
        /// State address
        address: String,
    },
    /// Submit a serialized batch list and wait for its status
    Submit {
        /// File holding the serialized batch list
        file: PathBuf,
    },
    /// List the peers of the node
    Peers {
        /// Output format requested from the peer CLI
        #[arg(long, value_enum, default_value_t = PeerFormat::Json)]
        format: PeerFormat,
    },
    /// Check that all nodes agree on a block
    Consensus {
        /// Block number, counted from genesis
        block_num: usize,
        /// REST API endpoints to compare, discovered through the peer CLI if omitted
        #[arg(long, value_delimiter = ',')]
        nodes: Vec<String>,
    },
    /// Start or stop the validator
    Validator {
        #[command(subcommand)]
        action: Lifecycle,
    },
    /// Start or stop the settings transaction processor
    SettingsTp {
        #[command(subcommand)]
        action: Lifecycle,
    },
    /// Create or delete the genesis data
    Genesis {
        #[command(subcommand)]
        action: GenesisAction,
    },
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Lifecycle {
    /// Start the process in the background
    Start,
    /// Kill the process
    Stop,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum GenesisAction {
    /// Create the genesis batch and block
    Create,
    /// Remove the files of the validator data directory
    Delete,
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    /// Block id to read the listing at
    #[arg(long)]
    head: Option<String>,
    /// Resource id, or the address prefix for state listings
    #[arg(long, visible_alias = "address")]
    id: Option<String>,
    /// Paging start
    #[arg(long)]
    start: Option<String>,
    /// Paging limit
    #[arg(long)]
    limit: Option<u64>,
    /// Count, transactions and state only
    #[arg(long)]
    count: Option<u64>,
    /// Reverse the order
    #[arg(long)]
    reverse: bool,
}

impl From<ListArgs> for QueryFilter {
    fn from(args: ListArgs) -> Self {
        QueryFilter {
            head: args.head,
            id: args.id,
            start: args.start,
            limit: args.limit,
            count: args.count,
            reverse: args.reverse,
        }
    }
}

fn print_json(value: &RestResponse) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to format response")?
    );
    Ok(())
}

fn poller(config: &HarnessConfig, tries: Option<u32>) -> Result<Poller> {
    let mut poll = config.poll.clone();
    if let Some(tries) = tries {
        poll.tries = tries;
    }
    Poller::from_config(&poll).context("Failed to create poller")
}

fn rest_client(config: &HarnessConfig) -> Result<RestApiClient> {
    RestApiClient::new_with_options(
        config.rest_api_url.as_str(),
        Duration::from_secs(config.wait_secs),
    )
    .with_context(|| format!("Invalid REST API url {}", config.rest_api_url))
}

async fn main_with_error() -> Result<()> {
    let args = Arguments::parse();
    setup_logging(env!("CARGO_CRATE_NAME"), &args.log_level)?;

    let mut config = HarnessConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(url) = args.url {
        config.rest_api_url = url;
    }

    let client = || rest_client(&config);

    match args.command {
        SubCommands::Wait { endpoints, tries } => {
            poller(&config, tries)?
                .wait_for_rest_apis(&endpoints)
                .await?;
            info!("All REST APIs are available");
        }
        SubCommands::WaitStatus { url, status, tries } => {
            let status = StatusCode::from_u16(status).context("Invalid status code")?;
            let attempts = poller(&config, tries)?
                .wait_until_status(&url, status)
                .await?;
            info!("{url} answered with {status} after {attempts} attempts");
        }
        SubCommands::Blocks(filter) => print_json(&client()?.get_blocks(&filter.into()).await?)?,
        SubCommands::Batches(filter) => print_json(&client()?.get_batches(&filter.into()).await?)?,
        SubCommands::Transactions(filter) => {
            print_json(&client()?.get_transactions(&filter.into()).await?)?
        }
        SubCommands::State(filter) => print_json(&client()?.get_state_list(&filter.into()).await?)?,
        SubCommands::Batch { batch_id } => print_json(&client()?.get_batch(&batch_id).await?)?,
        SubCommands::Transaction { transaction_id } => {
            print_json(&client()?.get_transaction(&transaction_id).await?)?
        }
        SubCommands::StateEntry { address } => print_json(&client()?.get_state(&address).await?)?,
        SubCommands::Submit { file } => {
            let batch = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read batch file {}", file.display()))?;
            print_json(&client()?.post_batch(batch).await?)?
        }
        SubCommands::Peers { format } => {
            let peers = get_peers_list(&config.peer_cli, &config.rest_api_url, format)
                .await
                .context("Failed to list peers")?;
            for peer in peers {
                println!("{peer}");
            }
        }
        SubCommands::Consensus { block_num, nodes } => {
            let nodes = if nodes.is_empty() {
                get_node_list(&config.peer_cli, &config.rest_api_url)
                    .await
                    .context("Failed to discover nodes")?
            } else {
                nodes
            };
            let client = reqwest::Client::builder()
                .timeout(Duration::from_millis(config.poll.request_timeout_ms))
                .build()
                .context("Failed to create HTTP client")?;
            let chains = get_node_chains(&client, &nodes).await;
            if !check_for_consensus(&chains, block_num) {
                bail!("Nodes are not in consensus on block {block_num}");
            }
            println!("{} nodes agree on block {block_num}", nodes.len());
        }
        SubCommands::Validator { action } => match action {
            Lifecycle::Start => {
                let child = config.commands.start_validator(Stdio::inherit())?;
                println!("{}", child.id().unwrap_or_default());
            }
            Lifecycle::Stop => {
                let status = config.commands.stop_validator().await?;
                info!("Validator kill command exited with {status}");
            }
        },
        SubCommands::SettingsTp { action } => match action {
            Lifecycle::Start => {
                let child = config.commands.start_settings_tp(Stdio::inherit())?;
                println!("{}", child.id().unwrap_or_default());
            }
            Lifecycle::Stop => {
                let status = config.commands.stop_settings_tp().await?;
                info!("settings-tp kill command exited with {status}");
            }
        },
        SubCommands::Genesis { action } => match action {
            GenesisAction::Create => config
                .commands
                .create_genesis(&config.genesis_dir)
                .await
                .context("Failed to create genesis")?,
            GenesisAction::Delete => {
                let removed = delete_genesis(&config.data_dir).with_context(|| {
                    format!("Failed to clear {}", config.data_dir.display())
                })?;
                info!("Removed {removed} files from {}", config.data_dir.display());
            }
        },
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let ret = main_with_error().await;
    if let Err(e) = &ret {
        error!(error = %e, "Execution failed");
    }
    ret
}
