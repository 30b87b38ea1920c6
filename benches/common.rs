#![allow(dead_code)]

use fastrand::Rng;
use pathmat::core::WeightMatrix;
use petgraph::prelude::*;

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub fn random_edges(vertex_count: usize, density: f32, rng: &mut Rng) -> Vec<(usize, usize, u32)> {
    let mut edges = Vec::new();

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u != v && rng.f32() < density {
                edges.push((u, v, rng.u32(1..100)));
            }
        }
    }

    edges
}

pub fn pathmat_random(vertex_count: usize, density: f32, rng: &mut Rng) -> WeightMatrix<u32> {
    WeightMatrix::from_edges(vertex_count, random_edges(vertex_count, density, rng)).unwrap()
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> Graph<(), u32, Directed> {
    let mut graph = Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    for (u, v, w) in random_edges(vertex_count, density, rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
    }

    graph
}
