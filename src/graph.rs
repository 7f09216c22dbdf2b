use serde::Serialize;
use thiserror::Error;

/// Errors raised while constructing a graph. Detection itself is total and
/// never fails on a validly constructed graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex count must be at least 1")]
    InvalidVertexCount,
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex { vertex: usize, vertex_count: usize },
    #[error("adjacency matrix is not square: row {row} has {len} entries, expected {expected}")]
    MatrixShape {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// A directed graph over vertices `0..vertex_count`, stored as a dense
/// boolean adjacency matrix: `adj[u][v]` is true iff the edge u→v exists.
///
/// The vertex count is fixed at construction. Edges are added during setup
/// and the graph is treated as immutable once detection starts, so shared
/// references can be handed to concurrent detection calls safely.
///
/// Self-loops are representable and count as 1-vertex cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiGraph {
    vertex_count: usize,
    adj: Vec<Vec<bool>>,
}

impl DiGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// # Example
    /// ```
    /// use cyclegraph::DiGraph;
    ///
    /// let mut g = DiGraph::new(3).unwrap();
    /// g.add_edge(0, 1).unwrap();
    /// assert!(g.has_edge(0, 1));
    /// assert!(!g.has_edge(1, 0));
    /// ```
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount);
        }
        Ok(Self {
            vertex_count,
            adj: vec![vec![false; vertex_count]; vertex_count],
        })
    }

    /// Builds a graph from a full 0/1 adjacency matrix in row-major order.
    ///
    /// Rejects an empty matrix and any non-square matrix.
    pub fn from_matrix(rows: Vec<Vec<bool>>) -> Result<Self, GraphError> {
        let vertex_count = rows.len();
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount);
        }
        for (row, entries) in rows.iter().enumerate() {
            if entries.len() != vertex_count {
                return Err(GraphError::MatrixShape {
                    row,
                    len: entries.len(),
                    expected: vertex_count,
                });
            }
        }
        Ok(Self {
            vertex_count,
            adj: rows,
        })
    }

    /// Records the directed edge u→v. Re-adding an existing edge is a no-op.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adj[u][v] = true;
        Ok(())
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex >= self.vertex_count {
            return Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adj[u][v]
    }

    /// Successors of `v` in ascending index order. Iteration order matters:
    /// both detectors rely on it for deterministic results.
    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.adj[v]
            .iter()
            .enumerate()
            .filter_map(|(u, &edge)| edge.then_some(u))
    }

    /// Number of incoming edges for every vertex, computed fresh.
    ///
    /// Never cached on the graph — each Kahn run derives its own copy so
    /// repeated runs cannot contaminate each other.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0usize; self.vertex_count];
        for row in &self.adj {
            for (v, &edge) in row.iter().enumerate() {
                if edge {
                    degrees[v] += 1;
                }
            }
        }
        degrees
    }

    pub fn edge_count(&self) -> usize {
        self.adj
            .iter()
            .map(|row| row.iter().filter(|&&e| e).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_vertices_rejected() {
        assert_eq!(DiGraph::new(0), Err(GraphError::InvalidVertexCount));
    }

    #[test]
    fn test_add_edge_out_of_range() {
        let mut g = DiGraph::new(2).unwrap();
        assert_eq!(
            g.add_edge(0, 2),
            Err(GraphError::InvalidVertex {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(
            g.add_edge(5, 0),
            Err(GraphError::InvalidVertex {
                vertex: 5,
                vertex_count: 2
            })
        );
        // rejected edges leave the graph untouched
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_add_edge_idempotent() {
        let mut g = DiGraph::new(2).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 1).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_representable() {
        let mut g = DiGraph::new(1).unwrap();
        g.add_edge(0, 0).unwrap();
        assert!(g.has_edge(0, 0));
    }

    #[test]
    fn test_neighbors_ascending() {
        let mut g = DiGraph::new(4).unwrap();
        g.add_edge(1, 3).unwrap();
        g.add_edge(1, 0).unwrap();
        g.add_edge(1, 2).unwrap();
        let succs: Vec<usize> = g.neighbors(1).collect();
        assert_eq!(succs, vec![0, 2, 3]);
    }

    #[test]
    fn test_in_degrees() {
        let mut g = DiGraph::new(3).unwrap();
        g.add_edge(0, 2).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 0).unwrap();
        assert_eq!(g.in_degrees(), vec![1, 0, 2]);
    }

    #[test]
    fn test_from_matrix() {
        let g = DiGraph::from_matrix(vec![vec![false, true], vec![false, false]]).unwrap();
        assert_eq!(g.vertex_count(), 2);
        assert!(g.has_edge(0, 1));
        assert!(!g.has_edge(1, 0));
    }

    #[test]
    fn test_from_matrix_rejects_non_square() {
        let err = DiGraph::from_matrix(vec![vec![false, true], vec![false]]).unwrap_err();
        assert_eq!(
            err,
            GraphError::MatrixShape {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn test_from_matrix_rejects_empty() {
        assert_eq!(
            DiGraph::from_matrix(Vec::new()),
            Err(GraphError::InvalidVertexCount)
        );
    }
}
