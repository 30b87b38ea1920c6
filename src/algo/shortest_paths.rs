//! Shortest path distances on dense [weight matrices](WeightMatrix).
//!
//! Two independent solvers over the same data model:
//!
//! * [`AllShortestPaths`] computes the distances between every pair of
//!   vertices in one pass (Floyd–Warshall).
//! * [`ShortestPaths`] computes the distances from one source vertex
//!   (Dijkstra's algorithm with a binary heap).
//!
//! For every source vertex the two agree on all distances, which makes them
//! natural benchmark rivals; see `benches/shortest_paths.rs`.
//!
//! # Examples
//!
//! ```
//! use pathmat::algo::{AllShortestPaths, ShortestPaths};
//! use pathmat::core::WeightMatrix;
//!
//! let matrix = WeightMatrix::from_edges(
//!     4,
//!     [(0, 1, 1u32), (1, 2, 2), (0, 2, 5), (2, 3, 1)],
//! )
//! .unwrap();
//!
//! let all = AllShortestPaths::run(&matrix);
//! let from_zero = ShortestPaths::run(&matrix, 0).unwrap();
//!
//! // 0 -> 1 -> 2 -> 3 is shorter than the direct 0 -> 2 hop.
//! assert_eq!(all.dist(0, 3), Some(&4));
//! assert_eq!(from_zero.dist(3), Some(&4));
//! ```

use std::{fmt, ops::Index};

use thiserror::Error;

use crate::core::{
    matrix::{fmt_table, WeightMatrix},
    weight::Weight,
};

mod dijkstra;
mod floyd_warshall;

use dijkstra::dijkstra;
use floyd_warshall::floyd_warshall;

/// Algorithm for [`AllShortestPaths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Algo {
    /// [Floyd–Warshall
    /// algorithm](https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm).
    ///
    /// Relaxes every pair of vertices through every candidate intermediate
    /// vertex on a private copy of the matrix. O(N³) regardless of density
    /// and tolerant of negative edge weights as long as there is no negative
    /// cycle.
    FloydWarshall,

    /// [Dijkstra's
    /// algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
    /// invoked once per source vertex.
    ///
    /// Requires non-negative edge weights. Faster than Floyd–Warshall on
    /// sparse inputs, slower on dense ones; mainly useful as a point of
    /// comparison.
    Dijkstra,
}

/// The error encountered during a shortest paths run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge with negative weight encountered.
    #[error("edge with negative weight encountered")]
    NegativeWeight,
}

/// Shortest path distances from a single source vertex to every vertex.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<W> {
    source: usize,
    dist: Vec<W>,
}

impl<W> ShortestPaths<W>
where
    W: Weight,
{
    /// Runs Dijkstra's algorithm from `source`.
    ///
    /// The matrix is only read, never mutated. `source` must be a valid
    /// vertex index.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NegativeWeight`] when a negative edge weight is
    /// encountered during the search and `W` is a signed type. Negative
    /// weights make the result meaningless either way, but edges into
    /// already finished vertices are not inspected, so not every negative
    /// edge is detected.
    pub fn run(matrix: &WeightMatrix<W>, source: usize) -> Result<Self, Error> {
        dijkstra(matrix, source)
    }

    /// Source vertex where the search was started.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Number of vertices of the searched matrix.
    pub fn vertex_count(&self) -> usize {
        self.dist.len()
    }

    /// Returns the path distance between the source vertex and the given
    /// vertex, or `None` if the vertex is unreachable.
    pub fn dist(&self, to: usize) -> Option<&W> {
        let dist = &self.dist[to];
        (*dist != W::inf()).then_some(dist)
    }

    /// Iterates over the distances to all vertices in vertex order,
    /// unreachable vertices yielding `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<&W>> {
        self.dist.iter().map(|dist| (*dist != W::inf()).then_some(dist))
    }
}

impl<W: Weight> Index<usize> for ShortestPaths<W> {
    type Output = W;

    fn index(&self, index: usize) -> &Self::Output {
        self.dist(index).unwrap()
    }
}

/// Shortest path distances between every pair of vertices.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct AllShortestPaths<W> {
    n: usize,
    dist: Vec<W>,
}

impl<W> AllShortestPaths<W>
where
    W: Weight,
{
    /// Runs the Floyd–Warshall algorithm over a private copy of the matrix.
    ///
    /// The input matrix is never mutated. Correct as long as the matrix
    /// contains no negative cycle, which is a precondition, not a detected
    /// error.
    pub fn run(matrix: &WeightMatrix<W>) -> Self {
        floyd_warshall(matrix)
    }

    /// Computes the all-pairs distances with the given algorithm:
    /// [`Algo::FloydWarshall`] in one pass, or [`Algo::Dijkstra`] once per
    /// source vertex.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NegativeWeight`] when Dijkstra's algorithm is
    /// chosen and a negative edge weight is encountered.
    pub fn run_algo(matrix: &WeightMatrix<W>, algo: Algo) -> Result<Self, Error> {
        match algo {
            Algo::FloydWarshall => Ok(floyd_warshall(matrix)),
            Algo::Dijkstra => {
                let n = matrix.vertex_count();
                let mut dist = Vec::with_capacity(n * n);

                for source in 0..n {
                    dist.extend(dijkstra(matrix, source)?.dist);
                }

                Ok(Self { n, dist })
            }
        }
    }

    /// Number of vertices of the searched matrix.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Returns the path distance between the two given vertices, or `None`
    /// if the destination is unreachable from the source.
    pub fn dist(&self, from: usize, to: usize) -> Option<&W> {
        let dist = &self.dist[from * self.n + to];
        (*dist != W::inf()).then_some(dist)
    }

    /// Distances from `from` to all vertices in vertex order, unreachable
    /// vertices holding the sentinel.
    pub fn row(&self, from: usize) -> &[W] {
        &self.dist[from * self.n..(from + 1) * self.n]
    }
}

impl<W: Weight> Index<(usize, usize)> for AllShortestPaths<W> {
    type Output = W;

    fn index(&self, (from, to): (usize, usize)) -> &Self::Output {
        self.dist(from, to).unwrap()
    }
}

impl<W: Weight + fmt::Display> fmt::Display for AllShortestPaths<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_table(f, self.n, &self.dist)
    }
}
