use std::fmt;
use std::ops::Index;

use thiserror::Error;

use crate::core::weight::Weight;

/// Dense square matrix of edge weights, indexed by `(source, destination)`.
///
/// The diagonal is always [`Weight::zero`] (a path from a vertex to itself has
/// no cost) and an off-diagonal entry equal to [`Weight::inf`] marks the
/// absence of a direct edge. Only the sentinel marks absence -- a zero
/// off-diagonal entry is a legitimate zero-cost edge.
///
/// The storage is an owned, row-major `Vec`, so cloning the matrix is a deep
/// copy with independent rows.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix<W> {
    n: usize,
    entries: Vec<W>,
}

/// The error encountered when constructing a [`WeightMatrix`].
#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    /// A row has a different length than the number of rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// An edge endpoint is not a valid vertex.
    #[error("vertex {vertex} out of bounds (vertex count is {bound})")]
    VertexOutOfBounds { vertex: usize, bound: usize },

    /// An edge connects a vertex to itself.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: usize },

    /// A diagonal entry holds a nonzero weight.
    #[error("nonzero diagonal entry for vertex {vertex}")]
    NonzeroDiagonal { vertex: usize },
}

impl<W: Weight> WeightMatrix<W> {
    /// Creates a matrix for `n` vertices with no edges: zero on the diagonal,
    /// the sentinel everywhere else.
    pub fn with_vertex_count(n: usize) -> Self {
        let mut entries = vec![W::inf(); n * n];

        for v in 0..n {
            entries[v * n + v] = W::zero();
        }

        Self { n, entries }
    }

    /// Creates a matrix from complete rows, validating that the input is
    /// square and has a zero diagonal.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self, MatrixError> {
        let n = rows.len();

        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: n,
                });
            }
        }

        for (v, row) in rows.iter().enumerate() {
            if row[v] != W::zero() {
                return Err(MatrixError::NonzeroDiagonal { vertex: v });
            }
        }

        let entries = rows.into_iter().flatten().collect();
        Ok(Self { n, entries })
    }

    /// Creates a matrix for `n` vertices from `(source, destination, weight)`
    /// triples. Endpoints must be valid vertices and distinct.
    ///
    /// A later triple for the same pair overwrites the earlier one.
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, MatrixError>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut matrix = Self::with_vertex_count(n);

        for (u, v, weight) in edges {
            for vertex in [u, v] {
                if vertex >= n {
                    return Err(MatrixError::VertexOutOfBounds { vertex, bound: n });
                }
            }

            if u == v {
                return Err(MatrixError::SelfLoop { vertex: u });
            }

            matrix.entries[u * n + v] = weight;
        }

        Ok(matrix)
    }

    /// Number of vertices (the matrix is `N` x `N`).
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Weight of the entry `(u, v)`. The sentinel means there is no edge.
    pub fn weight(&self, u: usize, v: usize) -> &W {
        &self.entries[u * self.n + v]
    }

    /// Returns `true` if there is a direct edge from `u` to `v`, that is, the
    /// entry is not the sentinel.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        *self.weight(u, v) != W::inf()
    }

    /// Weights of all edges leaving `u`, in destination order.
    pub fn row(&self, u: usize) -> &[W] {
        &self.entries[u * self.n..(u + 1) * self.n]
    }

    /// Sets the weight of the edge from `u` to `v`.
    ///
    /// # Panics
    ///
    /// Panics if `u == v`, because the diagonal holds the fixed zero cost of
    /// staying at a vertex, or if either endpoint is out of bounds.
    pub fn set_weight(&mut self, u: usize, v: usize, weight: W) {
        assert!(u != v, "the diagonal is fixed at zero");
        self.entries[u * self.n + v] = weight;
    }

    pub(crate) fn as_raw(&self) -> &[W] {
        &self.entries
    }
}

impl<W: Weight> Index<(usize, usize)> for WeightMatrix<W> {
    type Output = W;

    fn index(&self, (u, v): (usize, usize)) -> &Self::Output {
        self.weight(u, v)
    }
}

impl<W: Weight + fmt::Display> fmt::Display for WeightMatrix<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_table(f, self.n, &self.entries)
    }
}

/// Renders a square table with vertex labels, the sentinel shown as `.`.
pub(crate) fn fmt_table<W>(f: &mut fmt::Formatter<'_>, n: usize, entries: &[W]) -> fmt::Result
where
    W: Weight + fmt::Display,
{
    let cells = entries
        .iter()
        .map(|w| {
            if *w == W::inf() {
                ".".to_string()
            } else {
                w.to_string()
            }
        })
        .collect::<Vec<_>>();

    let label_width = if n > 1 { digits(n - 1) } else { 1 };
    let width = cells
        .iter()
        .map(|cell| cell.len())
        .chain(Some(label_width))
        .max()
        .unwrap_or(1);

    write!(f, "{:>label_width$}  ", "")?;
    for v in 0..n {
        write!(f, " {v:>width$}")?;
    }
    writeln!(f)?;

    writeln!(f, "{:>label_width$} {}", "", "-".repeat((width + 1) * n + 1))?;

    for u in 0..n {
        write!(f, "{u:>label_width$} |")?;
        for cell in &cells[u * n..(u + 1) * n] {
            write!(f, " {cell:>width$}")?;
        }
        writeln!(f)?;
    }

    Ok(())
}

fn digits(mut value: usize) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn with_vertex_count_has_no_edges() {
        let matrix = WeightMatrix::<u32>::with_vertex_count(3);

        for u in 0..3 {
            for v in 0..3 {
                if u == v {
                    assert_eq!(*matrix.weight(u, v), 0);
                } else {
                    assert_eq!(*matrix.weight(u, v), u32::MAX);
                    assert!(!matrix.has_edge(u, v));
                }
            }
        }
    }

    #[test]
    fn from_rows_accepts_square_input() {
        let inf = u32::MAX;
        let matrix = WeightMatrix::from_rows(vec![
            vec![0, 4, inf],
            vec![inf, 0, 7],
            vec![1, inf, 0],
        ])
        .unwrap();

        assert_eq!(matrix.vertex_count(), 3);
        assert_eq!(*matrix.weight(0, 1), 4);
        assert_eq!(*matrix.weight(2, 0), 1);
        assert!(!matrix.has_edge(0, 2));
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let result = WeightMatrix::from_rows(vec![vec![0u32, 1], vec![1, 0], vec![1, 1, 0]]);

        assert_matches!(
            result,
            Err(MatrixError::NotSquare {
                row: 0,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn from_rows_rejects_nonzero_diagonal() {
        let result = WeightMatrix::from_rows(vec![vec![0u32, 1], vec![1, 5]]);

        assert_matches!(result, Err(MatrixError::NonzeroDiagonal { vertex: 1 }));
    }

    #[test]
    fn from_edges_rejects_out_of_bounds() {
        let result = WeightMatrix::from_edges(2, [(0, 3, 1u32)]);

        assert_matches!(
            result,
            Err(MatrixError::VertexOutOfBounds { vertex: 3, bound: 2 })
        );
    }

    #[test]
    fn from_edges_rejects_self_loop() {
        let result = WeightMatrix::from_edges(2, [(1, 1, 1u32)]);

        assert_matches!(result, Err(MatrixError::SelfLoop { vertex: 1 }));
    }

    #[test]
    fn zero_weight_edge_is_an_edge() {
        let matrix = WeightMatrix::from_edges(2, [(0, 1, 0u32)]).unwrap();

        assert!(matrix.has_edge(0, 1));
        assert_eq!(*matrix.weight(0, 1), 0);
    }

    #[test]
    #[should_panic]
    fn set_weight_rejects_diagonal() {
        let mut matrix = WeightMatrix::<u32>::with_vertex_count(2);

        matrix.set_weight(1, 1, 5);
    }

    #[test]
    fn clone_is_deep() {
        let matrix = WeightMatrix::from_edges(2, [(0, 1, 3u32)]).unwrap();
        let mut copy = matrix.clone();

        copy.set_weight(0, 1, 9);

        assert_eq!(*matrix.weight(0, 1), 3);
        assert_eq!(*copy.weight(0, 1), 9);
    }

    #[test]
    fn display_renders_table() {
        let matrix = WeightMatrix::from_edges(2, [(0, 1, 1u32)]).unwrap();

        let expected = "    0 1\n  -----\n0 | 0 1\n1 | . 0\n";
        assert_eq!(matrix.to_string(), expected);
    }
}
