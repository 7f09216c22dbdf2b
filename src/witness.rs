//! Cycle witness paths and the shared reconstruction logic behind them.
//!
//! Both detectors reduce "a cycle exists" to the same evidence: an ordered
//! vertex sequence whose consecutive pairs are true edges and whose first and
//! last elements coincide. The DFS detector produces it by walking parent
//! links back from a back edge; the Kahn detector by a depth-bounded search
//! inside this module ([`closed_walk`]). Either way the contract is identical,
//! which is what lets integration tests validate a path without caring who
//! produced it.

use crate::graph::DiGraph;
use serde::Serialize;
use std::fmt;

/// A closed walk through the graph: `[v0, v1, …, vk]` with `v0 == vk` and a
/// directed edge between every consecutive pair. Length is always ≥ 2;
/// a self-loop yields `[v, v]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CyclePath(Vec<usize>);

impl CyclePath {
    fn new(vertices: Vec<usize>) -> Self {
        debug_assert!(vertices.len() >= 2);
        debug_assert_eq!(vertices.first(), vertices.last());
        Self(vertices)
    }

    /// Rebuilds the cycle closed by the back edge `cycle_end → cycle_start`.
    ///
    /// Walks `parent` links from `cycle_end` back to `cycle_start`, reverses
    /// the collected chain, and appends `cycle_start` again to close the loop.
    /// Terminates because parent links form a simple path from a DFS tree root
    /// through `cycle_start` down to `cycle_end`. Stale parent entries on
    /// unrelated branches are harmless — the walk never touches them.
    ///
    /// A back edge onto the current vertex (`cycle_start == cycle_end`)
    /// is a self-loop and yields `[v, v]`.
    pub(crate) fn from_parent_chain(
        parent: &[Option<usize>],
        cycle_start: usize,
        cycle_end: usize,
    ) -> Self {
        let mut chain = Vec::new();
        let mut current = cycle_end;
        while current != cycle_start {
            chain.push(current);
            current = parent[current].unwrap();
        }
        chain.push(cycle_start);
        chain.reverse();
        chain.push(cycle_start);
        Self::new(chain)
    }

    /// The vertex sequence, first element repeated at the end.
    pub fn vertices(&self) -> &[usize] {
        &self.0
    }

    /// Number of edges in the cycle (one for a self-loop).
    pub fn edge_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Checks the closed-walk contract against a concrete graph: length ≥ 2,
    /// first == last, and every consecutive pair an existing directed edge.
    pub fn is_valid_for(&self, graph: &DiGraph) -> bool {
        if self.0.len() < 2 || self.0.first() != self.0.last() {
            return false;
        }
        if self.0.iter().any(|&v| v >= graph.vertex_count()) {
            return false;
        }
        self.0.windows(2).all(|pair| graph.has_edge(pair[0], pair[1]))
    }
}

impl fmt::Display for CyclePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Searches `component` for an explicit closed walk starting and ending at
/// its lowest-index vertex.
///
/// `component` must be sorted ascending; the search runs entirely within it
/// and is depth-bounded by the component size, so it terminates on any input.
/// A singleton component closes only via a self-loop. Returns `None` when no
/// closing walk exists within the bound — callers treat the component
/// membership itself as the remaining evidence.
///
/// # Example
/// ```
/// use cyclegraph::{DiGraph, witness::closed_walk};
///
/// let mut g = DiGraph::new(2).unwrap();
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(1, 0).unwrap();
/// let path = closed_walk(&g, &[0, 1]).unwrap();
/// assert_eq!(path.vertices(), &[0, 1, 0]);
/// ```
pub fn closed_walk(graph: &DiGraph, component: &[usize]) -> Option<CyclePath> {
    let start = *component.first()?;
    if component.len() == 1 {
        return graph
            .has_edge(start, start)
            .then(|| CyclePath::new(vec![start, start]));
    }

    let mut in_component = vec![false; graph.vertex_count()];
    for &v in component {
        in_component[v] = true;
    }

    let mut visited = vec![false; graph.vertex_count()];
    let mut path = Vec::with_capacity(component.len() + 1);
    if search(
        graph,
        start,
        start,
        &in_component,
        &mut visited,
        &mut path,
        0,
        component.len(),
    ) {
        Some(CyclePath::new(path))
    } else {
        None
    }
}

/// Depth-bounded DFS for an edge back to `target` after at least one step.
/// `visited` and `path` are scoped to this search only.
#[allow(clippy::too_many_arguments)]
fn search(
    graph: &DiGraph,
    current: usize,
    target: usize,
    in_component: &[bool],
    visited: &mut [bool],
    path: &mut Vec<usize>,
    depth: usize,
    bound: usize,
) -> bool {
    path.push(current);
    if depth >= bound {
        path.pop();
        return false;
    }
    visited[current] = true;

    for next in graph.neighbors(current) {
        if !in_component[next] {
            continue;
        }
        if next == target && depth > 0 {
            path.push(next);
            return true;
        }
        if !visited[next]
            && search(
                graph,
                next,
                target,
                in_component,
                visited,
                path,
                depth + 1,
                bound,
            )
        {
            return true;
        }
    }

    visited[current] = false;
    path.pop();
    false
}
