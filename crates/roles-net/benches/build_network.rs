use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roles_core::{NetworkView, RngHandle};
use roles_net::{gen_random, DirectedView};

fn build_network_bench(c: &mut Criterion) {
    c.bench_function("build_random_500", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            let network = gen_random(500, 0.02, 3, &mut rng).unwrap();
            black_box(network);
        });
    });

    let mut rng = RngHandle::from_seed(7);
    let network = gen_random(500, 0.02, 3, &mut rng).unwrap();
    c.bench_function("undirected_tie_scan_500", |b| {
        let view = DirectedView::undirected(&network);
        b.iter(|| {
            let total: usize = (0..view.node_count()).map(|node| view.count_ties(node)).sum();
            black_box(total);
        });
    });
}

criterion_group!(benches, build_network_bench);
criterion_main!(benches);
