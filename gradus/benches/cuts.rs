mod common;

use common::{gradus_random_directed, gradus_random_undirected, petgraph_random_directed, RANDOM_SEED};
use fastrand::Rng;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.001, 0.01, 0.1])]
fn gradus_cuts_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = gradus_random_undirected(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| gradus::algo::Cuts::on(&graph).run());
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.001, 0.01, 0.1])]
fn gradus_augmentation_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = gradus_random_undirected(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| gradus::algo::augmentation_count(&graph));
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.001, 0.01, 0.1])]
fn gradus_kosaraju_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = gradus_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        gradus::algo::StronglyConnectedComponents::on(&graph)
            .kosaraju()
            .run()
            .len()
    });
}

#[divan::bench(consts = [100, 1000, 10000], args = [0.001, 0.01, 0.1])]
fn petgraph_kosaraju_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::kosaraju_scc(&graph).len());
}
