//! Depth-first cycle detection via back-edge identification.
//!
//! A directed graph is cyclic iff a DFS finds a *back edge*: an edge whose
//! target is still on the current root-to-leaf recursion path. Tracking that
//! path with a dedicated on-stack flag (distinct from the visited flag) is
//! what keeps cross edges in DAGs with shared descendants from being
//! misreported as cycles.
//!
//! Two equivalent entry points are provided:
//!
//! - [`detect`] — natural call-stack recursion; depth is bounded by the
//!   vertex count, so very large graphs are limited by the host stack.
//! - [`detect_iterative`] — the same traversal with an explicit frame stack,
//!   removing the depth limit. Both visit vertices and edges in identical
//!   order and return identical results for every graph.

use crate::graph::DiGraph;
use crate::witness::CyclePath;
use serde::Serialize;

/// Result of a DFS detection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DfsOutcome {
    /// No back edge anywhere — the graph is a DAG.
    Acyclic,
    /// A back edge was found; `path` is the reconstructed witness cycle.
    Cyclic { path: CyclePath },
}

impl DfsOutcome {
    pub fn is_cyclic(&self) -> bool {
        matches!(self, DfsOutcome::Cyclic { .. })
    }
}

/// Detects a cycle by recursive depth-first search.
///
/// Starts a DFS from each unvisited vertex in ascending index order and scans
/// neighbors in ascending index order, so the result is deterministic for a
/// fixed edge set. All traversal state is allocated per call; concurrent
/// calls on a shared graph are safe.
///
/// # Example
/// ```
/// use cyclegraph::{DiGraph, dfs};
///
/// let mut g = DiGraph::new(3).unwrap();
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(1, 2).unwrap();
/// g.add_edge(2, 0).unwrap();
///
/// match dfs::detect(&g) {
///     dfs::DfsOutcome::Cyclic { path } => assert_eq!(path.vertices(), &[0, 1, 2, 0]),
///     dfs::DfsOutcome::Acyclic => panic!("expected cycle"),
/// }
/// ```
pub fn detect(graph: &DiGraph) -> DfsOutcome {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    for start in 0..n {
        if visited[start] {
            continue;
        }
        if let Some((cycle_start, cycle_end)) =
            visit(graph, start, &mut visited, &mut on_stack, &mut parent)
        {
            log::debug!("back edge {cycle_end} -> {cycle_start} closes a cycle");
            return DfsOutcome::Cyclic {
                path: CyclePath::from_parent_chain(&parent, cycle_start, cycle_end),
            };
        }
    }
    DfsOutcome::Acyclic
}

/// Visits `v`, returning `(cycle_start, cycle_end)` for the first back edge
/// found beneath it. Unwinds immediately on detection; on a clean return the
/// on-stack flag is cleared so it reflects only the current path.
fn visit(
    graph: &DiGraph,
    v: usize,
    visited: &mut [bool],
    on_stack: &mut [bool],
    parent: &mut [Option<usize>],
) -> Option<(usize, usize)> {
    visited[v] = true;
    on_stack[v] = true;

    for u in graph.neighbors(v) {
        if !visited[u] {
            parent[u] = Some(v);
            if let Some(found) = visit(graph, u, visited, on_stack, parent) {
                return Some(found);
            }
        } else if on_stack[u] {
            // back edge v → u: u is an ancestor on the current path
            return Some((u, v));
        }
    }

    on_stack[v] = false;
    None
}

/// Detects a cycle with an explicit frame stack instead of call-stack
/// recursion.
///
/// Preserves [`detect`]'s discovery order and back-edge semantics exactly —
/// the frame stack substitutes for the call stack, nothing else changes.
/// Use this form when vertex counts may exceed safe recursion depth.
pub fn detect_iterative(graph: &DiGraph) -> DfsOutcome {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut on_stack = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    // Each frame tracks the vertex and the next neighbor candidate to scan.
    struct Frame {
        vertex: usize,
        next: usize,
    }

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        on_stack[start] = true;
        let mut frames = vec![Frame {
            vertex: start,
            next: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            let v = frame.vertex;
            if frame.next < n {
                let u = frame.next;
                frame.next += 1;
                if !graph.has_edge(v, u) {
                    continue;
                }
                if !visited[u] {
                    visited[u] = true;
                    on_stack[u] = true;
                    parent[u] = Some(v);
                    frames.push(Frame { vertex: u, next: 0 });
                } else if on_stack[u] {
                    log::debug!("back edge {v} -> {u} closes a cycle");
                    return DfsOutcome::Cyclic {
                        path: CyclePath::from_parent_chain(&parent, u, v),
                    };
                }
            } else {
                on_stack[v] = false;
                frames.pop();
            }
        }
    }
    DfsOutcome::Acyclic
}
