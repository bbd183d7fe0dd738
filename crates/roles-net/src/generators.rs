use rand::seq::SliceRandom;
use rand::Rng;
use roles_core::errors::RoleError;
use roles_core::RngHandle;

use crate::config::NetworkConfig;
use crate::network::{network_error, ContextExt, Network};

/// Generates a directed random network where every ordered pair of distinct
/// nodes is tied with probability `density`.
///
/// Weights are drawn uniformly from `1..=max_weight`.
pub fn gen_random(
    n_nodes: usize,
    density: f64,
    max_weight: i64,
    rng: &mut RngHandle,
) -> Result<Network, RoleError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(network_error("density-range", "density must lie in [0, 1]")
            .with_context("density", density));
    }
    if max_weight < 1 {
        return Err(network_error("weight-range", "max weight must be positive")
            .with_context("max_weight", max_weight));
    }
    let mut network = Network::with_nodes(n_nodes, NetworkConfig::default());
    for source in 0..n_nodes {
        for target in 0..n_nodes {
            if source != target && rng.gen_bool(density) {
                let weight = rng.gen_range(1..=max_weight);
                network.add_tie(source, target, weight)?;
            }
        }
    }
    Ok(network)
}

/// Generates a network in which every node has exactly `out_degree`
/// outgoing ties to distinct, randomly chosen other nodes.
pub fn gen_out_regular(
    n_nodes: usize,
    out_degree: usize,
    rng: &mut RngHandle,
) -> Result<Network, RoleError> {
    if n_nodes > 0 && out_degree >= n_nodes {
        return Err(network_error("degree-range", "out degree must be below node count")
            .with_context("out_degree", out_degree)
            .with_context("nodes", n_nodes));
    }
    let mut network = Network::with_nodes(n_nodes, NetworkConfig::default());
    for source in 0..n_nodes {
        let mut others: Vec<usize> = (0..n_nodes).filter(|&node| node != source).collect();
        others.shuffle(rng);
        others.truncate(out_degree);
        others.sort_unstable();
        for target in others {
            network.add_tie(source, target, 1)?;
        }
    }
    Ok(network)
}

/// Directed cycle `0 -> 1 -> ... -> n-1 -> 0` with unit weights.
pub fn gen_ring(n_nodes: usize) -> Result<Network, RoleError> {
    let edges: Vec<(usize, usize)> = (0..n_nodes)
        .filter(|_| n_nodes > 1)
        .map(|node| (node, (node + 1) % n_nodes))
        .collect();
    Network::from_edges(n_nodes, &edges)
}
