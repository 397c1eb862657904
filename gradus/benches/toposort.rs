mod common;

use common::{gradus_random_directed, petgraph_random_directed, RANDOM_SEED};
use fastrand::Rng;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn gradus_dfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = gradus_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| gradus::algo::TopoSort::on(&graph).dfs().run().map(|order| order.into_vec()));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn petgraph_dfs_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::toposort(&graph, None));
}

#[divan::bench(consts = [100, 1000], args = [0.05, 0.5, 0.95])]
fn gradus_kahn_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = gradus_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| gradus::algo::TopoSort::on(&graph).kahn().run().map(|order| order.into_vec()));
}
