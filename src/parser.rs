//! Text format for adjacency matrices.
//!
//! The format is the vertex count followed by a full `n × n` matrix of 0/1
//! entries in row-major order, all whitespace-separated. Line breaks are
//! cosmetic:
//!
//! ```text
//! 3
//! 0 1 0
//! 0 0 1
//! 1 0 0
//! ```

use crate::graph::{DiGraph, GraphError};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("expected a positive vertex count, found {0:?}")]
    VertexCount(String),
    #[error("matrix entry {position} is {token:?}, expected 0 or 1")]
    Token { token: String, position: usize },
    #[error("expected {expected} matrix entries, found {found}")]
    EntryCount { expected: usize, found: usize },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parses a vertex count and adjacency matrix from text.
pub fn parse_matrix(input: &str) -> Result<DiGraph, ParseError> {
    let mut tokens = input.split_whitespace();

    let head = tokens
        .next()
        .ok_or_else(|| ParseError::VertexCount(String::new()))?;
    let n: usize = head
        .parse()
        .map_err(|_| ParseError::VertexCount(head.to_string()))?;
    if n == 0 {
        return Err(GraphError::InvalidVertexCount.into());
    }

    // n * n overflows usize long before any real matrix could follow
    let expected = n
        .checked_mul(n)
        .ok_or_else(|| ParseError::VertexCount(head.to_string()))?;
    let entries: Vec<&str> = tokens.collect();
    if entries.len() != expected {
        return Err(ParseError::EntryCount {
            expected,
            found: entries.len(),
        });
    }

    let mut rows = vec![Vec::with_capacity(n); n];
    for (position, token) in entries.into_iter().enumerate() {
        let entry = match token {
            "0" => false,
            "1" => true,
            other => {
                return Err(ParseError::Token {
                    token: other.to_string(),
                    position,
                });
            }
        };
        rows[position / n].push(entry);
    }

    Ok(DiGraph::from_matrix(rows)?)
}

/// Reads and parses an adjacency matrix file.
pub fn load_matrix(path: &Path) -> Result<DiGraph, ParseError> {
    let text = fs::read_to_string(path)?;
    parse_matrix(&text)
}
