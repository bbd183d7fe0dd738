use roles_core::{transpose_target, NetworkView, TransposableNetworkView};

/// Adjacency-list view whose ties are target node indices.
struct ListView {
    adjacency: Vec<Vec<usize>>,
}

impl NetworkView for ListView {
    type Tie = (usize, usize);

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn ties(&self, node: usize) -> Box<dyn Iterator<Item = Self::Tie> + '_> {
        Box::new(self.adjacency[node].iter().copied().enumerate())
    }

    fn tie_target(&self, _node: usize, tie: &Self::Tie) -> usize {
        tie.1
    }

    fn tie_index(&self, _node: usize, tie: &Self::Tie) -> usize {
        tie.0
    }
}

impl TransposableNetworkView for ListView {}

fn targets_transposed<V: TransposableNetworkView>(
    view: &V,
    ref_a: usize,
    ref_b: usize,
    node: usize,
) -> Vec<usize> {
    view.ties_transposed(ref_a, ref_b, node)
        .map(|tie| view.tie_target_transposed(ref_a, ref_b, node, &tie))
        .collect()
}

#[test]
fn swap_rule_only_applies_to_ref_b() {
    assert_eq!(transpose_target(1, 2, 2, 1), 2);
    assert_eq!(transpose_target(1, 2, 2, 2), 1);
    assert_eq!(transpose_target(1, 2, 2, 0), 0);
    assert_eq!(transpose_target(1, 2, 1, 2), 2);
    assert_eq!(transpose_target(1, 2, 0, 1), 1);
}

#[test]
fn mutual_ties_line_up_after_transposition() {
    // 0 <-> 1 plus a shared tie to 2.
    let view = ListView {
        adjacency: vec![vec![1, 2], vec![0, 2], vec![]],
    };
    assert_eq!(targets_transposed(&view, 0, 1, 0), vec![1, 2]);
    assert_eq!(targets_transposed(&view, 0, 1, 1), vec![1, 2]);
    assert_eq!(targets_transposed(&view, 0, 1, 2), Vec::<usize>::new());
}

#[test]
fn loops_are_swapped_on_ref_b() {
    // Both nodes carry a loop; node 1 also points at node 0.
    let view = ListView {
        adjacency: vec![vec![0], vec![1, 0]],
    };
    assert_eq!(targets_transposed(&view, 0, 1, 1), vec![0, 1]);
    assert_eq!(targets_transposed(&view, 0, 1, 0), vec![0]);
    assert_eq!(view.count_ties_transposed(0, 1, 1), 2);
}

#[test]
fn borrowed_views_forward_every_method() {
    let view = ListView {
        adjacency: vec![vec![1], vec![0, 1]],
    };
    let borrowed = &view;
    assert_eq!(borrowed.node_count(), 2);
    assert_eq!(borrowed.count_ties(1), 2);
    let tie = borrowed.ties(1).nth(1).unwrap();
    assert_eq!(borrowed.tie_index(1, &tie), 1);
    assert_eq!(borrowed.tie_index_transposed(0, 1, 1, &tie), 1);
    assert_eq!(borrowed.tie_target_transposed(0, 1, 1, &tie), 0);
}
