use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roles_core::{Partition, RngHandle};
use roles_net::{gen_random, DirectedView};
use roles_ops::RoleOperators;

fn fixpoint_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(11);
    let network = gen_random(200, 0.05, 3, &mut rng).unwrap();
    let start = Partition::indiscrete(200);

    let regular = RoleOperators::equivalence()
        .regular()
        .of(200, DirectedView::incoming(&network))
        .make()
        .unwrap();
    c.bench_function("regular_incoming_200", |b| {
        b.iter(|| black_box(regular.apply(&start).unwrap()));
    });

    let equitable = RoleOperators::equivalence()
        .equitable()
        .of(200, DirectedView::incoming(&network))
        .comp(|a, b| a.weight.cmp(&b.weight))
        .unwrap()
        .make()
        .unwrap();
    c.bench_function("equitable_weighted_incoming_200", |b| {
        b.iter(|| black_box(equitable.apply(&start).unwrap()));
    });
}

criterion_group!(benches, fixpoint_bench);
criterion_main!(benches);
