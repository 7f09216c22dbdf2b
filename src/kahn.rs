//! Cycle detection by topological peeling (Kahn's algorithm).
//!
//! Reference: Kahn, "Topological Sorting of Large Networks," CACM 1962.
//!
//! Repeatedly consume vertices of in-degree zero. If every vertex is
//! consumed, the consumption order is a topological sort and the graph is
//! acyclic. Otherwise the leftover vertices are exactly those touched by at
//! least one cycle: the subgraph they induce has no vertex of in-degree
//! zero, hence no topological prefix, hence a cycle.
//!
//! The classical algorithm stops at "a cycle exists among these vertices".
//! Turning that into an explicit closed walk is a separate, deliberately
//! bounded step layered on top: collect a connected bundle of leftover
//! vertices (seeds tried in ascending index order), then run the
//! depth-bounded walk search from [`witness`] inside it. The bound keeps
//! the refinement terminating on any input; if the walk search comes up
//! empty the component membership is still reported as evidence.

use crate::graph::DiGraph;
use crate::witness::{self, CyclePath};
use serde::Serialize;
use std::collections::VecDeque;

/// Result of a Kahn detection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum KahnOutcome {
    /// All vertices were consumed; `topo_order` is a valid topological sort.
    Acyclic { topo_order: Vec<usize> },
    /// Some vertices never reached in-degree zero. `members` lists them in
    /// ascending order; `path` is the explicit witness walk, or `None` when
    /// the bounded refinement could not close one (the membership itself
    /// remains the evidence).
    Cyclic {
        members: Vec<usize>,
        path: Option<CyclePath>,
    },
}

impl KahnOutcome {
    pub fn is_cyclic(&self) -> bool {
        matches!(self, KahnOutcome::Cyclic { .. })
    }
}

/// Detects a cycle by topological peeling.
///
/// In-degrees are computed fresh for each call and the frontier is a FIFO
/// queue seeded in ascending index order, so results are deterministic and
/// repeated calls cannot contaminate each other.
///
/// # Example
/// ```
/// use cyclegraph::{DiGraph, kahn};
///
/// let mut g = DiGraph::new(3).unwrap();
/// g.add_edge(0, 1).unwrap();
/// g.add_edge(1, 2).unwrap();
///
/// match kahn::detect(&g) {
///     kahn::KahnOutcome::Acyclic { topo_order } => assert_eq!(topo_order, vec![0, 1, 2]),
///     kahn::KahnOutcome::Cyclic { .. } => panic!("expected DAG"),
/// }
/// ```
pub fn detect(graph: &DiGraph) -> KahnOutcome {
    let n = graph.vertex_count();
    let mut in_degree = graph.in_degrees();

    let mut frontier: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut topo_order = Vec::with_capacity(n);

    while let Some(u) = frontier.pop_front() {
        topo_order.push(u);
        log::trace!("peeled vertex {u}");
        for v in graph.neighbors(u) {
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                frontier.push_back(v);
            }
        }
    }

    if topo_order.len() == n {
        return KahnOutcome::Acyclic { topo_order };
    }

    let mut consumed = vec![false; n];
    for &v in &topo_order {
        consumed[v] = true;
    }
    let members: Vec<usize> = (0..n).filter(|&v| !consumed[v]).collect();
    log::debug!(
        "peeled {} of {n} vertices; cycle among {members:?}",
        topo_order.len()
    );

    let path = refine(graph, &members);
    KahnOutcome::Cyclic { members, path }
}

/// Refines "a cycle exists among `members`" into an explicit closed walk.
///
/// Walks the members in ascending order as search seeds, collecting the
/// vertices reachable from each seed through member-only edges. The first
/// bundle of size > 1 — or a singleton whose vertex carries a self-loop —
/// is handed to the depth-bounded walk search.
fn refine(graph: &DiGraph, members: &[usize]) -> Option<CyclePath> {
    let n = graph.vertex_count();
    let mut in_members = vec![false; n];
    for &v in members {
        in_members[v] = true;
    }

    let mut visited = vec![false; n];
    for &seed in members {
        if visited[seed] {
            continue;
        }
        let mut component = Vec::new();
        collect(graph, seed, &in_members, &mut visited, &mut component);
        component.sort_unstable();

        if component.len() > 1 || graph.has_edge(component[0], component[0]) {
            log::debug!("searching component {component:?} for a closed walk");
            return witness::closed_walk(graph, &component);
        }
    }
    None
}

/// Reachability DFS from `v` restricted to edges with both endpoints in the
/// unconsumed set.
fn collect(
    graph: &DiGraph,
    v: usize,
    in_members: &[bool],
    visited: &mut [bool],
    component: &mut Vec<usize>,
) {
    visited[v] = true;
    component.push(v);
    for u in graph.neighbors(v) {
        if in_members[u] && !visited[u] {
            collect(graph, u, in_members, visited, component);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from_edges(n: usize, edges: &[(usize, usize)]) -> DiGraph {
        let mut g = DiGraph::new(n).unwrap();
        for &(u, v) in edges {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    #[test]
    fn test_edgeless_graph_order_is_identity() {
        let g = graph_from_edges(4, &[]);
        assert_eq!(
            detect(&g),
            KahnOutcome::Acyclic {
                topo_order: vec![0, 1, 2, 3]
            }
        );
    }

    #[test]
    fn test_chain_dag_topo_order() {
        let g = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(
            detect(&g),
            KahnOutcome::Acyclic {
                topo_order: vec![0, 1, 2, 3]
            }
        );
    }

    #[test]
    fn test_topo_order_respects_edges() {
        let g = graph_from_edges(5, &[(3, 1), (1, 4), (0, 4), (2, 0)]);
        match detect(&g) {
            KahnOutcome::Acyclic { topo_order } => {
                assert_eq!(topo_order.len(), 5);
                let pos = |v: usize| topo_order.iter().position(|&x| x == v).unwrap();
                assert!(pos(3) < pos(1));
                assert!(pos(1) < pos(4));
                assert!(pos(0) < pos(4));
                assert!(pos(2) < pos(0));
            }
            KahnOutcome::Cyclic { .. } => panic!("expected DAG"),
        }
    }

    #[test]
    fn test_three_cycle_path() {
        let g = graph_from_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        match detect(&g) {
            KahnOutcome::Cyclic { members, path } => {
                assert_eq!(members, vec![0, 1, 2]);
                let path = path.expect("refinement should close the walk");
                assert_eq!(path.vertices(), &[0, 1, 2, 0]);
                assert!(path.is_valid_for(&g));
            }
            KahnOutcome::Acyclic { .. } => panic!("expected cycle"),
        }
    }

    #[test]
    fn test_self_loop() {
        let g = graph_from_edges(3, &[(0, 2), (1, 1)]);
        match detect(&g) {
            KahnOutcome::Cyclic { members, path } => {
                assert_eq!(members, vec![1]);
                assert_eq!(path.unwrap().vertices(), &[1, 1]);
            }
            KahnOutcome::Acyclic { .. } => panic!("expected cycle"),
        }
    }

    #[test]
    fn test_members_include_cycle_descendants() {
        // 0 → 1 → 0 feeds 2; 2 never reaches in-degree zero either
        let g = graph_from_edges(3, &[(0, 1), (1, 0), (1, 2)]);
        match detect(&g) {
            KahnOutcome::Cyclic { members, path } => {
                assert_eq!(members, vec![0, 1, 2]);
                let path = path.unwrap();
                assert_eq!(path.vertices(), &[0, 1, 0]);
            }
            KahnOutcome::Acyclic { .. } => panic!("expected cycle"),
        }
    }

    #[test]
    fn test_disjoint_cycles_witness_in_first() {
        let g = graph_from_edges(4, &[(0, 1), (1, 0), (2, 3), (3, 2)]);
        match detect(&g) {
            KahnOutcome::Cyclic { members, path } => {
                assert_eq!(members, vec![0, 1, 2, 3]);
                // lowest-index seed wins the tie-break
                assert_eq!(path.unwrap().vertices(), &[0, 1, 0]);
            }
            KahnOutcome::Acyclic { .. } => panic!("expected cycle"),
        }
    }

    #[test]
    fn test_cycle_behind_prefix() {
        // 0 → 1 → 2 → 3 → 2: prefix 0, 1 peels, cycle {2, 3} remains
        let g = graph_from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 2)]);
        match detect(&g) {
            KahnOutcome::Cyclic { members, path } => {
                assert_eq!(members, vec![2, 3]);
                assert_eq!(path.unwrap().vertices(), &[2, 3, 2]);
            }
            KahnOutcome::Acyclic { .. } => panic!("expected cycle"),
        }
    }

    #[test]
    fn test_detection_is_idempotent() {
        let g = graph_from_edges(5, &[(0, 1), (1, 2), (2, 0), (3, 4)]);
        assert_eq!(detect(&g), detect(&g));
    }

    #[test]
    fn test_defensive_fallback_keeps_members() {
        // Cycle 1 ↔ 2 spills into the chain 0 → 3, so all four vertices stay
        // unconsumed. The ascending seed order picks the bundle {0, 3} first,
        // and no walk inside it can close; the refinement then reports
        // membership only instead of failing.
        let g = graph_from_edges(4, &[(1, 2), (2, 1), (2, 0), (0, 3)]);
        match detect(&g) {
            KahnOutcome::Cyclic { members, path } => {
                assert_eq!(members, vec![0, 1, 2, 3]);
                assert_eq!(path, None);
            }
            KahnOutcome::Acyclic { .. } => panic!("expected cycle"),
        }
    }
}
