use proptest::prelude::*;
use roles_core::{NetworkView, RngHandle};
use roles_net::{
    canonical_hash, gen_out_regular, gen_random, gen_ring, network_from_bytes, network_to_bytes,
    DirectedView,
};

proptest! {
    #[test]
    fn random_networks_are_simple_and_reproducible(
        seed in any::<u64>(),
        nodes in 1usize..12,
        density in 0.0f64..=1.0,
    ) {
        let mut rng = RngHandle::from_seed(seed);
        let network = gen_random(nodes, density, 5, &mut rng).unwrap();
        for tie in network.ties() {
            prop_assert_ne!(tie.source, tie.target);
            prop_assert!((1..=5).contains(&tie.weight));
        }
        prop_assert_eq!(network.to_relation().pair_count(), network.tie_count());

        let mut again = RngHandle::from_seed(seed);
        let replay = gen_random(nodes, density, 5, &mut again).unwrap();
        prop_assert_eq!(canonical_hash(&network), canonical_hash(&replay));

        let restored = network_from_bytes(&network_to_bytes(&network).unwrap()).unwrap();
        prop_assert_eq!(restored.ties(), network.ties());
    }

    #[test]
    fn out_regular_networks_have_fixed_out_degree(seed in any::<u64>(), nodes in 2usize..10) {
        let degree = nodes / 2;
        let mut rng = RngHandle::from_seed(seed);
        let network = gen_out_regular(nodes, degree, &mut rng).unwrap();
        let view = DirectedView::outgoing(&network);
        for node in 0..nodes {
            prop_assert_eq!(view.count_ties(node), degree);
        }
    }
}

#[test]
fn ring_has_unit_degrees() {
    let ring = gen_ring(5).unwrap();
    assert_eq!(ring.tie_count(), 5);
    for node in 0..5 {
        assert_eq!(ring.in_degree(node).unwrap(), 1);
        assert_eq!(ring.out_degree(node).unwrap(), 1);
    }
    assert_eq!(gen_ring(1).unwrap().tie_count(), 0);
}

#[test]
fn generator_arguments_are_checked() {
    let mut rng = RngHandle::from_seed(3);
    assert!(gen_random(3, 1.5, 2, &mut rng).is_err());
    assert!(gen_random(3, 0.5, 0, &mut rng).is_err());
    assert!(gen_out_regular(3, 3, &mut rng).is_err());
}
