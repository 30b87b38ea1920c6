//! [Proptest](https://proptest-rs.github.io/proptest) strategies for random
//! weight matrices, available with the `proptest` feature.

use proptest::{collection, option, prelude::*};

use crate::core::matrix::WeightMatrix;

/// Strategy producing directed weight matrices with 1 to `max_vertices`
/// vertices and finite weights below `max_weight`.
///
/// Roughly a third of the off-diagonal entries hold an edge; the rest stay at
/// the sentinel.
pub fn weight_matrix(
    max_vertices: usize,
    max_weight: u32,
) -> impl Strategy<Value = WeightMatrix<u32>> {
    (1..=max_vertices).prop_flat_map(move |n| {
        collection::vec(option::weighted(0.3, 0..max_weight), n * n).prop_map(move |entries| {
            let mut matrix = WeightMatrix::with_vertex_count(n);

            for (index, entry) in entries.into_iter().enumerate() {
                let (u, v) = (index / n, index % n);

                if u != v {
                    if let Some(weight) = entry {
                        matrix.set_weight(u, v, weight);
                    }
                }
            }

            matrix
        })
    })
}

/// Strategy producing symmetric weight matrices, that is, undirected graphs:
/// every generated edge is mirrored with the same weight.
pub fn symmetric_weight_matrix(
    max_vertices: usize,
    max_weight: u32,
) -> impl Strategy<Value = WeightMatrix<u32>> {
    weight_matrix(max_vertices, max_weight).prop_map(|mut matrix| {
        let n = matrix.vertex_count();

        for u in 0..n {
            for v in (u + 1)..n {
                let weight = *matrix.weight(u, v);
                matrix.set_weight(v, u, weight);
            }
        }

        matrix
    })
}
