use sha2::{Digest, Sha256};

use crate::config::NetworkConfig;
use crate::network::Network;

/// Computes a structural hash that ignores tie insertion order.
pub fn canonical_hash(network: &Network) -> String {
    let mut hasher = Sha256::new();
    encode_config(network.config(), &mut hasher);
    hasher.update((network.node_count() as u64).to_le_bytes());

    let mut signatures: Vec<(usize, usize, i64)> = network
        .ties()
        .iter()
        .map(|tie| (tie.source, tie.target, tie.weight))
        .collect();
    signatures.sort_unstable();
    hasher.update((signatures.len() as u64).to_le_bytes());
    for (source, target, weight) in signatures {
        hasher.update((source as u64).to_le_bytes());
        hasher.update((target as u64).to_le_bytes());
        hasher.update(weight.to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}

fn encode_config(config: &NetworkConfig, hasher: &mut Sha256) {
    hasher.update(if config.allow_loops { b"loops:on" } else { b"loops:no" });
    hasher.update(if config.allow_parallel {
        b"parallel:on"
    } else {
        b"parallel:no"
    });
    hasher.update(config.schema_version.major.to_le_bytes());
    hasher.update(config.schema_version.minor.to_le_bytes());
    hasher.update(config.schema_version.patch.to_le_bytes());
}
