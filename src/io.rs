//! Reading [weight matrices](WeightMatrix) from a textual adjacency
//! description.
//!
//! The format is line-oriented. The first non-empty line holds the vertex
//! count. Every following non-empty line describes the outgoing edges of one
//! vertex as whitespace-separated `neighbor weight` pairs:
//!
//! ```text
//! 4
//! 0 1 1 2 5
//! 1 2 2
//! 2 3 1
//! ```
//!
//! Vertices without outgoing edges may be omitted. Entries not mentioned stay
//! at the "no edge" sentinel and the diagonal stays at zero.

use std::{fs, io, path::Path, str::FromStr};

use thiserror::Error;

use crate::core::{
    matrix::{MatrixError, WeightMatrix},
    weight::Weight,
};

/// The error encountered when importing a weight matrix.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    /// The input has no vertex count header.
    #[error("missing vertex count header")]
    MissingHeader,

    /// A token is not a number of the expected kind.
    #[error("invalid token {token:?} on line {line}")]
    InvalidToken { line: usize, token: String },

    /// A neighbor is listed without the corresponding weight.
    #[error("neighbor without weight on line {line}")]
    MissingWeight { line: usize },

    /// The described edges do not form a valid matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Reads a weight matrix from the file at `path`.
pub fn read_matrix<W, P>(path: P) -> Result<WeightMatrix<W>, ImportError>
where
    W: Weight + FromStr,
    P: AsRef<Path>,
{
    parse_matrix(&fs::read_to_string(path)?)
}

/// Parses a weight matrix from the adjacency description in `input`.
pub fn parse_matrix<W>(input: &str) -> Result<WeightMatrix<W>, ImportError>
where
    W: Weight + FromStr,
{
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line, header) = lines.next().ok_or(ImportError::MissingHeader)?;
    let n = parse_token::<usize>(line, header)?;

    let mut edges = Vec::new();

    for (line, text) in lines {
        let mut tokens = text.split_whitespace();

        // The first token names the vertex, the rest are (neighbor, weight)
        // pairs.
        let vertex = match tokens.next() {
            Some(token) => parse_token::<usize>(line, token)?,
            None => continue,
        };

        while let Some(token) = tokens.next() {
            let neighbor = parse_token::<usize>(line, token)?;
            let weight = tokens
                .next()
                .ok_or(ImportError::MissingWeight { line })
                .and_then(|token| parse_token::<W>(line, token))?;

            edges.push((vertex, neighbor, weight));
        }
    }

    Ok(WeightMatrix::from_edges(n, edges)?)
}

fn parse_token<T: FromStr>(line: usize, token: &str) -> Result<T, ImportError> {
    token.parse().map_err(|_| ImportError::InvalidToken {
        line,
        token: token.to_string(),
    })
}
