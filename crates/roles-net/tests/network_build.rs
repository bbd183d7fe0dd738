use roles_core::{Relation, RoleError};
use roles_net::{Network, NetworkConfig};

#[test]
fn ties_are_indexed_in_insertion_order() {
    let mut network = Network::with_nodes(3, NetworkConfig::default());
    assert_eq!(network.add_tie(0, 1, 4).unwrap(), 0);
    assert_eq!(network.add_tie(2, 1, 7).unwrap(), 1);
    assert_eq!(network.add_tie(1, 1, 1).unwrap(), 2);

    assert_eq!(network.node_count(), 3);
    assert_eq!(network.tie_count(), 3);
    let tie = network.tie(1).unwrap();
    assert_eq!((tie.source, tie.target, tie.weight), (2, 1, 7));
    assert_eq!(network.in_degree(1).unwrap(), 3);
    assert_eq!(network.out_degree(1).unwrap(), 1);
    assert_eq!(network.out_degree(0).unwrap(), 1);
    assert!(network.has_tie(2, 1));
    assert!(!network.has_tie(1, 2));
}

#[test]
fn invalid_ties_are_rejected() {
    let mut network = Network::with_nodes(2, NetworkConfig::default());
    network.add_tie(0, 1, 1).unwrap();

    assert!(matches!(
        network.add_tie(0, 5, 1),
        Err(RoleError::Network(info)) if info.code == "unknown-node"
    ));
    assert!(matches!(
        network.add_tie(0, 1, 2),
        Err(RoleError::Network(info)) if info.code == "parallel-tie"
    ));
    assert!(matches!(
        network.tie(9),
        Err(RoleError::Network(info)) if info.code == "unknown-tie"
    ));
    assert!(network.in_degree(2).is_err());
    assert_eq!(network.tie_count(), 1);

    let mut strict = Network::with_nodes(
        1,
        NetworkConfig {
            allow_loops: false,
            ..NetworkConfig::default()
        },
    );
    assert!(matches!(
        strict.add_tie(0, 0, 1),
        Err(RoleError::Network(info)) if info.code == "loop-rejected"
    ));
}

#[test]
fn multigraph_config_accepts_parallel_ties() {
    let network =
        Network::from_weighted_edges(2, &[(0, 1, 1), (0, 1, 3)], NetworkConfig::multigraph())
            .unwrap();
    assert_eq!(network.tie_count(), 2);
    assert_eq!(network.to_relation().pair_count(), 1);
}

#[test]
fn adjacency_relation_matches_ties() {
    let network = Network::from_edges(4, &[(0, 1), (1, 2), (2, 0), (3, 3)]).unwrap();
    let expected = Relation::from_pairs(4, [(0, 1), (1, 2), (2, 0), (3, 3)]).unwrap();
    assert_eq!(network.to_relation(), expected);
}

#[test]
fn nodes_can_be_appended() {
    let mut network = Network::new(NetworkConfig::default());
    assert_eq!(network.add_node(), 0);
    assert_eq!(network.add_node(), 1);
    network.add_tie(1, 0, 1).unwrap();
    assert_eq!(network.add_node(), 2);
    assert_eq!(network.in_degree(2).unwrap(), 0);
}
