use proptest::prelude::*;
use roles_core::{Lattice, Partition, Relation};
use roles_ops::{OperatorTags, RoleOperators};

fn chain() -> Relation {
    Relation::from_pairs(3, [(0, 1), (1, 2)]).unwrap()
}

#[test]
fn forward_returns_its_input() {
    let forward = RoleOperators::relation().basic().of(3).forward();
    assert_eq!(forward.apply(&chain()).unwrap(), chain());
    assert_eq!(forward.tags(), OperatorTags::identity());
    assert_eq!(forward.name(), "forward");
}

#[test]
fn relation_invert_transposes() {
    let invert = RoleOperators::relation().basic().of(3).invert();
    let inverted = invert.apply(&chain()).unwrap();
    assert!(inverted.contains(1, 0));
    assert!(inverted.contains(2, 1));
    assert!(!inverted.contains(0, 1));
    assert_eq!(invert.tags(), OperatorTags::isotone());
}

#[test]
fn partition_invert_is_the_identity() {
    let invert = RoleOperators::equivalence().basic().of(4).invert();
    let p = Partition::from_labels(&[0, 1, 0, 2]);
    assert_eq!(invert.apply(&p).unwrap(), p);
    assert_eq!(invert.tags(), OperatorTags::identity());
}

#[test]
fn constants_meet_and_join() {
    let basic = RoleOperators::equivalence().basic().of(4);
    let constant = Partition::from_labels(&[0, 0, 1, 1]);
    let input = Partition::from_labels(&[0, 1, 1, 2]);

    let produce = basic.produce_constant(constant.clone()).unwrap();
    assert_eq!(produce.apply(&input).unwrap(), constant);
    assert_eq!(produce.tags(), OperatorTags::constant());

    let meet = basic.meet_with_constant(constant.clone()).unwrap();
    assert_eq!(meet.apply(&input).unwrap(), Partition::discrete(4));
    assert_eq!(meet.tags(), OperatorTags::interior());

    let join = basic.join_with_constant(constant).unwrap();
    assert_eq!(join.apply(&input).unwrap(), Partition::indiscrete(4));
    assert_eq!(join.tags(), OperatorTags::closure());
}

#[test]
fn transitive_closure_is_reflexive() {
    let close = RoleOperators::relation().basic().of(3).close_transitively();
    let closed = close.apply(&chain()).unwrap();
    assert!(closed.contains(0, 2));
    assert!((0..3).all(|node| closed.contains(node, node)));
    assert!(!closed.contains(2, 0));
    assert_eq!(closed.pair_count(), 6);
}

#[test]
fn symmetrize_keeps_mutual_pairs() {
    let symmetrize = RoleOperators::relation().basic().of(3).symmetrize();
    let r = Relation::from_pairs(3, [(0, 1), (1, 0), (1, 2)]).unwrap();
    let expected = Relation::from_pairs(3, [(0, 1), (1, 0)]).unwrap();
    assert_eq!(symmetrize.apply(&r).unwrap(), expected);
}

#[test]
fn composition_names_and_tags() {
    let basic = RoleOperators::relation().basic().of(3);
    let composite = basic
        .symmetrize()
        .then(basic.close_transitively())
        .unwrap();
    assert_eq!(composite.name(), "symmetrize then close_transitively");
    assert_eq!(composite.tags(), OperatorTags::isotone());
    assert_eq!(composite.apply(&chain()).unwrap(), Relation::identity(3));

    let constant_first = basic
        .produce_constant(chain())
        .unwrap()
        .then(basic.invert())
        .unwrap();
    assert_eq!(constant_first.tags(), OperatorTags::constant());
    assert_eq!(
        constant_first.apply(&Relation::full(3)).unwrap(),
        chain().invert()
    );
}

#[test]
fn tags_render_their_claims() {
    assert_eq!(OperatorTags::interior().to_string(), "{isotone, nonincreasing}");
    assert_eq!(OperatorTags::NONE.to_string(), "{}");
}

fn relation(n: usize) -> impl Strategy<Value = Relation> {
    prop::collection::vec((0..n, 0..n), 0..n * 2)
        .prop_map(move |pairs| Relation::from_pairs(n, pairs).unwrap())
}

proptest! {
    #[test]
    fn double_inversion_is_the_identity(r in relation(7)) {
        let invert = RoleOperators::relation().basic().of(7).invert();
        let twice = invert.apply(&invert.apply(&r).unwrap()).unwrap();
        prop_assert_eq!(twice, r);
    }

    #[test]
    fn closure_of_a_closed_relation_is_stable(r in relation(7)) {
        let close = RoleOperators::relation().basic().of(7).close_transitively();
        let once = close.apply(&r).unwrap();
        prop_assert_eq!(close.apply(&once).unwrap(), once.clone());
        prop_assert!(r.leq(&once).unwrap());
    }
}
