#![allow(dead_code)]

use roles_net::{Network, NetworkConfig};

/// Adjacency list of the eleven node fixture.
///
/// Nodes 0-3 point at 4-6, nodes 4-6 point at 7-10, and nodes 7-10 point
/// back at 0-3. Node 7 ties twice to each of its targets.
pub const FIXTURE_ADJACENCY: [&[usize]; 11] = [
    &[4, 5, 6],
    &[4, 5, 6],
    &[4, 5, 6],
    &[4, 5, 6],
    &[7, 8, 9, 10],
    &[7, 8, 9, 10],
    &[7, 8, 9, 10],
    &[0, 0, 1, 1, 2, 2, 3, 3],
    &[0, 1, 2, 3],
    &[0, 1, 2, 3],
    &[0, 1, 2, 3],
];

/// Incoming strong structural classes of the fixture.
pub const FIXTURE_CLASSES: [usize; 11] = [0, 0, 0, 0, 1, 1, 1, 2, 2, 2, 2];

pub fn fixture() -> Network {
    let mut network = Network::with_nodes(FIXTURE_ADJACENCY.len(), NetworkConfig::multigraph());
    for (source, targets) in FIXTURE_ADJACENCY.iter().enumerate() {
        for &target in targets.iter() {
            network.add_tie(source, target, 1).unwrap();
        }
    }
    network
}

/// Directed path `0 -> 1 -> ... -> n-1`.
pub fn path(n: usize) -> Network {
    let edges: Vec<(usize, usize)> = (1..n).map(|node| (node - 1, node)).collect();
    Network::from_edges(n, &edges).unwrap()
}

/// Node 2 ties to nodes 0 and 1 with weights 5 and 7.
pub fn weighted_fork() -> Network {
    Network::from_weighted_edges(3, &[(2, 0, 5), (2, 1, 7)], NetworkConfig::default()).unwrap()
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
