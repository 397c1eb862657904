mod common;

use common::{gradus_random_directed, petgraph_random_directed, RANDOM_SEED};
use fastrand::Rng;
use gradus::core::id::*;
use petgraph::prelude::*;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.05, 0.25])]
fn gradus_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = gradus_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = VertexId::from_usize(N - 1);

    bencher.bench(|| {
        gradus::algo::ShortestPaths::on(&graph)
            .unit_weight()
            .bfs()
            .run(start)
    });
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.05, 0.25])]
fn petgraph_bfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(N - 1);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |_| 1usize));
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.05, 0.25])]
fn gradus_dial_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = gradus_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = VertexId::from_usize(N - 1);

    bencher.bench(|| gradus::algo::ShortestPaths::on(&graph).dial(10).run(start));
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.05, 0.25])]
fn petgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(N - 1);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.05, 0.25])]
fn gradus_zero_one_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = gradus_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = VertexId::from_usize(N - 1);

    bencher.bench(|| {
        gradus::algo::ShortestPaths::on(&graph)
            .edge_weight_fn(|w: &u32| w % 2)
            .zero_one()
            .run(start)
    });
}
