use std::{cmp::Reverse, collections::BinaryHeap};

use fixedbitset::FixedBitSet;

use crate::core::{
    matrix::WeightMatrix,
    weight::{Weight, Weighted},
};

use super::{Error, ShortestPaths};

pub fn dijkstra<W>(matrix: &WeightMatrix<W>, source: usize) -> Result<ShortestPaths<W>, Error>
where
    W: Weight,
{
    let n = matrix.vertex_count();

    let mut visited = FixedBitSet::with_capacity(n);
    let mut dist = vec![W::inf(); n];
    let mut queue = BinaryHeap::new();

    dist[source] = W::zero();
    queue.push(Reverse(Weighted(source, W::Ord::from(W::zero()))));

    while let Some(Reverse(Weighted(vertex, vertex_dist))) = queue.pop() {
        let vertex_dist: W = vertex_dist.into();

        // This can happen due to duplication of vertices when doing relaxation
        // in our implementation.
        if visited.contains(vertex) {
            continue;
        }

        for (next, weight) in matrix.row(vertex).iter().enumerate() {
            // The sentinel means there is no edge. A finite zero weight is a
            // real edge and is relaxed as usual. The diagonal entry relaxes
            // the vertex to itself with `next_dist == vertex_dist`, which is
            // not an improvement, so it falls through the check below.
            if *weight == W::inf() || visited.contains(next) {
                continue;
            }

            // The check for unsignedness should eliminate the negativity
            // weight check, because the implementation of `is_unsigned`
            // method is always a constant boolean in practice.
            if !W::is_unsigned() && *weight < W::zero() {
                return Err(Error::NegativeWeight);
            }

            let next_dist = vertex_dist.saturating_add(weight);

            // Relaxation operation. If the distance is better than what we
            // had so far, update it.
            if next_dist < dist[next] {
                dist[next] = next_dist.clone();
                // A textbook version of the algorithm would update the
                // priority of `next`. Adding it as a new item causes
                // duplicities which is unfortunate for dense graphs, but
                // should be fine in practice.
                queue.push(Reverse(Weighted(next, next_dist.into())));
            }
        }

        // The vertex is finished.
        visited.insert(vertex);
    }

    Ok(ShortestPaths { source, dist })
}
