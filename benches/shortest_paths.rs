mod common;

use common::{pathmat_random, petgraph_random, RANDOM_SEED};
use fastrand::Rng;
use pathmat::algo::shortest_paths::Algo;
use pathmat::algo::{AllShortestPaths, ShortestPaths};
use petgraph::prelude::*;

fn main() {
    divan::main();
}

#[divan::bench(consts = [16, 64, 256], args = [0.25, 0.75])]
fn pathmat_floyd_warshall_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let matrix = pathmat_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| AllShortestPaths::run(&matrix));
}

#[divan::bench(consts = [16, 64, 256], args = [0.25, 0.75])]
fn pathmat_dijkstra_all_sources_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let matrix = pathmat_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| AllShortestPaths::run_algo(&matrix, Algo::Dijkstra));
}

#[divan::bench(consts = [16, 64, 256], args = [0.25, 0.75])]
fn pathmat_dijkstra_single_source_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let matrix = pathmat_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ShortestPaths::run(&matrix, 0));
}

#[divan::bench(consts = [16, 64, 256], args = [0.25, 0.75])]
fn petgraph_floyd_warshall_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| petgraph::algo::floyd_warshall(&graph, |e| *e.weight()));
}

#[divan::bench(consts = [16, 64, 256], args = [0.25, 0.75])]
fn petgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}
