// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Ledger Harness Developers

//! Verifying that nodes agree on a block

use serde_json::Value;
use tracing::{error, info, warn};

/// Signature identifying a block in REST API listings.
pub fn header_signature(block: &Value) -> Option<&str> {
    block.get("header_signature").and_then(Value::as_str)
}

/// Check whether all `chains` agree on block number `block_num`.
///
/// Each chain is a block list as served by `/blocks`, newest block first, so
/// the compared block sits at `len - (block_num + 1)`.
///
/// Returns false if any chain is `None` or too short, if a block has no
/// `header_signature`, if two signatures differ, or if there is nothing to
/// compare. Only the comparison is made here; fetching is up to
/// [`get_node_chains`](crate::network::get_node_chains).
pub fn check_for_consensus(chains: &[Option<Vec<Value>>], block_num: usize) -> bool {
    info!("Checking Consensus on block number {block_num}");

    let mut blocks = Vec::with_capacity(chains.len());
    for chain in chains {
        let Some(chain) = chain else {
            warn!("A node's chain is missing");
            return false;
        };
        let Some(index) = block_num
            .checked_add(1)
            .and_then(|back| chain.len().checked_sub(back))
        else {
            warn!(
                "Chain of length {} has no block number {block_num}",
                chain.len()
            );
            return false;
        };
        blocks.push(&chain[index]);
    }

    let Some((block0, rest)) = blocks.split_first() else {
        warn!("No chains to compare");
        return false;
    };
    let Some(signature0) = header_signature(block0) else {
        error!("Block {block_num} has no header signature: {block0}");
        return false;
    };

    for block in rest {
        if header_signature(block) != Some(signature0) {
            error!("Validators not in consensus on block {block_num}");
            error!("BLOCK DUMP: {blocks:?}");
            return false;
        }
        info!("Validators in Consensus on block number {block_num}");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tracing_test::traced_test;

    /// A newest-first chain whose block `n` is signed `<prefix>n`.
    fn chain(prefix: &str, len: usize) -> Option<Vec<Value>> {
        Some(
            (0..len)
                .rev()
                .map(|n| json!({"header_signature": format!("{prefix}{n}"), "block_num": n}))
                .collect(),
        )
    }

    #[test]
    fn test_agreeing_chains() {
        let chains = vec![chain("s", 5), chain("s", 5), chain("s", 3)];
        assert!(check_for_consensus(&chains, 0));
        assert!(check_for_consensus(&chains, 2));
    }

    #[test]
    fn test_offset_counts_from_the_end_of_the_listing() {
        // same genesis, different tips
        let mut forked = chain("s", 4).unwrap();
        forked[0] = json!({"header_signature": "fork3"});
        let chains = vec![chain("s", 4), Some(forked)];

        assert!(check_for_consensus(&chains, 2));
        assert!(!check_for_consensus(&chains, 3));
    }

    #[test]
    #[traced_test]
    fn test_disagreement_is_logged() {
        let chains = vec![chain("s", 3), chain("t", 3)];
        assert!(!check_for_consensus(&chains, 1));
        assert!(logs_contain("Validators not in consensus on block 1"));
    }

    #[test]
    fn test_missing_chain() {
        let chains = vec![chain("s", 3), None, chain("s", 3)];
        assert!(!check_for_consensus(&chains, 0));
    }

    #[test]
    fn test_chain_too_short() {
        let chains = vec![chain("s", 3), chain("s", 1)];
        assert!(!check_for_consensus(&chains, 1));
        assert!(!check_for_consensus(&chains, usize::MAX));
    }

    #[test]
    fn test_missing_signature() {
        let chains = vec![Some(vec![json!({})]), Some(vec![json!({})])];
        assert!(!check_for_consensus(&chains, 0));
    }

    #[test]
    fn test_empty_and_single() {
        assert!(!check_for_consensus(&[], 0));
        assert!(check_for_consensus(&[chain("s", 2)], 1));
    }
}
