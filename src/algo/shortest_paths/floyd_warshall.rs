use crate::core::{matrix::WeightMatrix, weight::Weight};

use super::AllShortestPaths;

pub fn floyd_warshall<W>(matrix: &WeightMatrix<W>) -> AllShortestPaths<W>
where
    W: Weight,
{
    let n = matrix.vertex_count();

    // Deep copy of the owned storage. The caller's matrix stays untouched.
    let mut dist = matrix.as_raw().to_vec();

    for k in 0..n {
        for i in 0..n {
            let through_k = dist[i * n + k].clone();

            // An unreachable intermediate can't improve any pair.
            if through_k == W::inf() {
                continue;
            }

            for j in 0..n {
                let towards_j = &dist[k * n + j];

                // Both legs must exist. With signed weights, a negative
                // `through_k` added to the sentinel would land below it and
                // fake a finite distance for an unreachable pair.
                if *towards_j == W::inf() {
                    continue;
                }

                let next_dist = through_k.saturating_add(towards_j);

                // Relaxation operation. If the distance is better than what
                // we had so far, update it.
                if next_dist < dist[i * n + j] {
                    dist[i * n + j] = next_dist;
                }
            }
        }
    }

    AllShortestPaths { n, dist }
}
