use roles_core::{NetworkView, TransposableNetworkView};
use roles_net::{DirectedView, Direction, Network, NetworkConfig};

fn targets<V: NetworkView>(view: &V, node: usize) -> Vec<usize> {
    view.ties(node).map(|tie| view.tie_target(node, &tie)).collect()
}

fn sample() -> Network {
    // 0 -> 1, 0 -> 2, 1 -> 2, 2 -> 0, loop on 1.
    Network::from_edges(3, &[(0, 1), (0, 2), (1, 2), (2, 0), (1, 1)]).unwrap()
}

#[test]
fn outgoing_view_reports_tie_targets() {
    let network = sample();
    let view = DirectedView::outgoing(&network);
    assert_eq!(view.direction(), Direction::Outgoing);
    assert_eq!(view.node_count(), 3);
    assert_eq!(targets(&view, 0), vec![1, 2]);
    assert_eq!(targets(&view, 1), vec![2, 1]);
    assert_eq!(view.count_ties(1), 2);
}

#[test]
fn incoming_view_reports_tie_sources() {
    let network = sample();
    let view = DirectedView::incoming(&network);
    assert_eq!(targets(&view, 0), vec![2]);
    assert_eq!(targets(&view, 1), vec![0, 1]);
    assert_eq!(targets(&view, 2), vec![0, 1]);
    assert_eq!(view.count_ties(2), 2);
}

#[test]
fn undirected_view_lists_loops_once() {
    let network = sample();
    let view = DirectedView::undirected(&network);
    assert_eq!(targets(&view, 1), vec![2, 1, 0]);
    assert_eq!(view.count_ties(1), 3);
    assert_eq!(targets(&view, 0), vec![1, 2, 2]);
}

#[test]
fn tie_indices_survive_direction_changes() {
    let network = sample();
    let outgoing = DirectedView::outgoing(&network);
    let incoming = DirectedView::incoming(&network);
    let out_indices: Vec<usize> = outgoing
        .ties(0)
        .map(|tie| outgoing.tie_index(0, &tie))
        .collect();
    assert_eq!(out_indices, vec![0, 1]);
    let in_indices: Vec<usize> = incoming
        .ties(2)
        .map(|tie| incoming.tie_index(2, &tie))
        .collect();
    assert_eq!(in_indices, vec![1, 2]);
}

#[test]
fn transposed_reads_swap_the_reference_pair() {
    // 0 <-> 1 mutual, both point at 2.
    let network = Network::from_edges(3, &[(0, 1), (1, 0), (0, 2), (1, 2)]).unwrap();
    let view = DirectedView::outgoing(&network);
    let transposed: Vec<usize> = view
        .ties_transposed(0, 1, 1)
        .map(|tie| view.tie_target_transposed(0, 1, 1, &tie))
        .collect();
    assert_eq!(transposed, vec![1, 2]);
    assert_eq!(targets(&view, 0), vec![1, 2]);
    assert_eq!(view.count_ties_transposed(0, 1, 1), 2);
}

#[test]
fn multigraph_views_keep_parallel_ties() {
    let network =
        Network::from_weighted_edges(2, &[(0, 1, 2), (0, 1, 5)], NetworkConfig::multigraph())
            .unwrap();
    let view = DirectedView::new(&network, Direction::Incoming);
    let weights: Vec<i64> = view.ties(1).map(|tie| tie.weight).collect();
    assert_eq!(weights, vec![2, 5]);
}
