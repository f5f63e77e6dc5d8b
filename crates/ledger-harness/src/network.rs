// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Peer discovery and chain collection across the network

use crate::{error::HarnessError, process::run_peer_command};
use ledger_rest_api::{take_field, QueryFilter, RestApiClient, DEFAULT_WAIT_SECS};
use reqwest::Client;
use serde_json::Value;
use std::{collections::BTreeSet, fmt, time::Duration};
use tracing::{debug, warn};

/// Output format of the peer listing command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PeerFormat {
    /// A JSON array of endpoint strings
    Json,
    /// Comma separated endpoints
    Csv,
}

impl fmt::Display for PeerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerFormat::Json => write!(f, "json"),
            PeerFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Turn a peer's component endpoint into the address of its REST API,
/// e.g. `tcp://10.0.0.3:8800` into `http://10.0.0.3:8008`.
pub fn make_http_address(peer: &str) -> String {
    peer.replace("tcp", "http").replace("8800", "8008")
}

/// Parse the normalized output of the peer listing command.
pub fn parse_peers(output: &str, fmt: PeerFormat) -> Result<BTreeSet<String>, HarnessError> {
    match fmt {
        PeerFormat::Json => serde_json::from_str::<Vec<String>>(output)
            .map(|peers| peers.into_iter().collect())
            .map_err(|e| HarnessError::PeerOutput(format!("{e}: {output}"))),
        PeerFormat::Csv => Ok(output
            .split(',')
            .map(str::trim)
            .filter(|peer| !peer.is_empty())
            .map(String::from)
            .collect()),
    }
}

/// List the peers of the node at `rest_url` with `<peer_cli> peer list`.
pub async fn get_peers_list(
    peer_cli: &str,
    rest_url: &str,
    fmt: PeerFormat,
) -> Result<BTreeSet<String>, HarnessError> {
    let output =
        run_peer_command(&format!("{peer_cli} peer list --url {rest_url} --format {fmt}"))
            .await?;
    parse_peers(&output, fmt)
}

/// REST API addresses of all peers of the node at `client_address`, followed
/// by `client_address` itself.
pub async fn get_node_list(
    peer_cli: &str,
    client_address: &str,
) -> Result<Vec<String>, HarnessError> {
    let mut nodes: Vec<String> = get_peers_list(peer_cli, client_address, PeerFormat::Json)
        .await?
        .into_iter()
        .map(|peer| make_http_address(&peer))
        .collect();
    nodes.push(client_address.to_string());
    Ok(nodes)
}

/// Fetch the block list of every node, newest block first.
///
/// All requests go through `client`, so its timeout bounds the time spent on
/// a node that accepts connections but never answers.
///
/// The result has one entry per node. Nodes that cannot be queried are logged
/// and yield `None`, which [`check_for_consensus`](crate::consensus::check_for_consensus)
/// treats as disagreement.
pub async fn get_node_chains<S: AsRef<str>>(
    client: &Client,
    nodes: &[S],
) -> Vec<Option<Vec<Value>>> {
    let mut chains = Vec::with_capacity(nodes.len());
    for node in nodes {
        let node = node.as_ref();
        match get_node_chain(client, node).await {
            Ok(chain) => {
                debug!(node, blocks = chain.len(), "Fetched chain");
                chains.push(Some(chain));
            }
            Err(e) => {
                warn!("Couldn't connect to {node} REST API: {e}");
                chains.push(None);
            }
        }
    }
    chains
}

async fn get_node_chain(client: &Client, node: &str) -> Result<Vec<Value>, HarnessError> {
    let client = RestApiClient::new_with_client(
        client.clone(),
        node,
        Duration::from_secs(DEFAULT_WAIT_SECS),
    )?;
    let blocks = client.get_blocks(&QueryFilter::new()).await?;
    match take_field(blocks, "data")? {
        Value::Array(chain) => Ok(chain),
        _ => Err(ledger_rest_api::RestApiError::MissingField("data").into()),
    }
}
