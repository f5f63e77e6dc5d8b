// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

use ledger_harness::{consensus::check_for_consensus, network::get_node_chains};
use mockito::{Server, ServerGuard};
use reqwest::Client;
use serde_json::json;
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

fn client() -> Client {
    Client::builder()
        .timeout(Duration::from_millis(500))
        .build()
        .unwrap()
}

/// A node that accepts connections and never answers.
async fn silent_node() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            open.push(stream);
        }
    });
    format!("http://{addr}")
}

async fn node_with_blocks(signatures: &[&str]) -> ServerGuard {
    let mut server = Server::new_async().await;
    let data: Vec<_> = signatures
        .iter()
        .map(|s| json!({"header_signature": s}))
        .collect();
    server
        .mock("GET", "/blocks")
        .with_status(200)
        .with_body(json!({ "data": data, "head": signatures[0] }).to_string())
        .create_async()
        .await;
    server
}

#[tokio::test]
async fn test_chains_of_agreeing_nodes() {
    let node0 = node_with_blocks(&["b2", "b1", "b0"]).await;
    let node1 = node_with_blocks(&["b1", "b0"]).await;

    let chains = get_node_chains(&client(), &[node0.url(), node1.url()]).await;

    assert_eq!(chains.len(), 2);
    assert_eq!(chains[0].as_ref().map(Vec::len), Some(3));
    assert!(check_for_consensus(&chains, 0));
    assert!(check_for_consensus(&chains, 1));
}

#[tokio::test]
async fn test_unreachable_node_yields_none() {
    let node0 = node_with_blocks(&["b1", "b0"]).await;
    let mut down = Server::new_async().await;
    down.mock("GET", "/blocks")
        .with_status(503)
        .create_async()
        .await;

    let chains = get_node_chains(&client(), &[node0.url(), down.url()]).await;

    assert_eq!(chains.len(), 2);
    assert!(chains[0].is_some());
    assert!(chains[1].is_none());
    assert!(!check_for_consensus(&chains, 0));
}

#[tokio::test]
async fn test_forked_nodes() {
    let node0 = node_with_blocks(&["a2", "b1", "b0"]).await;
    let node1 = node_with_blocks(&["c2", "b1", "b0"]).await;

    let chains = get_node_chains(&client(), &[node0.url(), node1.url()]).await;

    assert!(check_for_consensus(&chains, 1));
    assert!(!check_for_consensus(&chains, 2));
}

#[tokio::test]
async fn test_silent_node_times_out() {
    let node0 = node_with_blocks(&["b1", "b0"]).await;
    let silent = silent_node().await;

    let start = Instant::now();
    let chains = get_node_chains(&client(), &[node0.url(), silent]).await;

    assert!(start.elapsed() < Duration::from_secs(5));
    assert!(chains[0].is_some());
    assert!(chains[1].is_none());
    assert!(!check_for_consensus(&chains, 0));
}
