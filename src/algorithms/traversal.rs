//! Breadth-first and depth-first traversal.
//!
//! Both walks prefer smaller vertex indices at every branch. Adjacency lists
//! are stored sorted, so that preference costs nothing per call. Only the
//! start vertex's component is visited; unreachable vertices are omitted.

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::UnGraph;

/// Breadth-first visitation order from `start`.
///
/// A vertex is marked visited when it is enqueued, so it is enqueued at most
/// once even with parallel edges. Returns an empty order for an out-of-range
/// start.
pub fn bfs(graph: &UnGraph, start: usize) -> Vec<usize> {
    let n = graph.node_count();
    if start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        for nb in graph.neighbors_slice(u) {
            if !visited[nb.node] {
                visited[nb.node] = true;
                queue.push_back(nb.node);
            }
        }
    }

    debug!(start, reached = order.len(), "bfs finished");
    order
}

/// Depth-first visitation order from `start`, using an explicit stack.
///
/// Neighbors are pushed in descending index order so the smallest is popped
/// first. A vertex may sit on the stack several times; it is visited the
/// first time it is popped and skipped afterwards.
pub fn dfs(graph: &UnGraph, start: usize) -> Vec<usize> {
    let n = graph.node_count();
    if start >= n {
        return Vec::new();
    }

    let mut visited = vec![false; n];
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(u) = stack.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        order.push(u);

        for nb in graph.neighbors_slice(u).iter().rev() {
            if !visited[nb.node] {
                stack.push(nb.node);
            }
        }
    }

    debug!(start, reached = order.len(), "dfs finished");
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(n: usize) -> UnGraph {
        let labels: Vec<String> = (0..n).map(|i| format!("v{i}")).collect();
        let mut g = UnGraph::new(&labels).unwrap();
        for i in 1..n {
            g.add_edge(i - 1, i, 1).unwrap();
        }
        g
    }

    #[test]
    fn test_single_vertex() {
        let g = UnGraph::new(["a"]).unwrap();
        assert_eq!(bfs(&g, 0), vec![0]);
        assert_eq!(dfs(&g, 0), vec![0]);
    }

    #[test]
    fn test_out_of_range_start() {
        let g = UnGraph::new(["a"]).unwrap();
        assert!(bfs(&g, 3).is_empty());
        assert!(dfs(&g, 3).is_empty());
    }

    #[test]
    fn test_bfs_level_order() {
        //   0
        //  / \
        // 1   2
        // |   |
        // 3   4
        let mut g = UnGraph::new(["a", "b", "c", "d", "e"]).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(2, 4, 1).unwrap();
        g.add_edge(1, 3, 1).unwrap();

        assert_eq!(bfs(&g, 0), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dfs_goes_deep_first() {
        let mut g = UnGraph::new(["a", "b", "c", "d", "e"]).unwrap();
        g.add_edge(0, 2, 1).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(2, 4, 1).unwrap();
        g.add_edge(1, 3, 1).unwrap();

        assert_eq!(dfs(&g, 0), vec![0, 1, 3, 2, 4]);
    }

    #[test]
    fn test_disconnected_component_omitted() {
        let mut g = UnGraph::new(["a", "b", "c", "d"]).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(2, 3, 1).unwrap();

        assert_eq!(bfs(&g, 0), vec![0, 1]);
        assert_eq!(dfs(&g, 3), vec![3, 2]);
    }

    #[test]
    fn test_parallel_edges_and_self_loops_do_not_duplicate() {
        let mut g = UnGraph::new(["a", "b", "c"]).unwrap();
        g.add_edge(0, 1, 1).unwrap();
        g.add_edge(0, 1, 2).unwrap();
        g.add_edge(1, 1, 3).unwrap();
        g.add_edge(1, 2, 1).unwrap();

        assert_eq!(bfs(&g, 0), vec![0, 1, 2]);
        assert_eq!(dfs(&g, 0), vec![0, 1, 2]);
    }

    #[test]
    fn test_deep_path_no_stack_overflow() {
        let g = path_graph(100_000);
        assert_eq!(dfs(&g, 0).len(), 100_000);
        assert_eq!(bfs(&g, 99_999).len(), 100_000);
    }
}
