//! Articulation points (cut vertices) and bridges.
//!
//! Both come from one depth-first pass over the start vertex's component
//! that records discovery times and low-link values:
//! - disc[v]: order in which v was first visited (1-based)
//! - low[v]: smallest discovery time reachable from v's DFS subtree using
//!   at most one non-tree edge
//!
//! The DFS runs on an explicit stack, so deep graphs cannot exhaust the
//! call stack. Discovery times are still assigned in pre-order and low-link
//! values propagate to the parent in post-order, exactly as the recursive
//! formulation does.

use tracing::debug;

use crate::graph::UnGraph;

/// Low-link data for the component containing `root`.
struct LowLink {
    root: usize,
    /// 0 means not visited
    disc: Vec<usize>,
    low: Vec<usize>,
    /// DFS tree parent; `None` for the root and unvisited vertices
    parent: Vec<Option<usize>>,
    /// Visited vertices in discovery order
    order: Vec<usize>,
    root_children: usize,
}

impl LowLink {
    /// Tree edges `(parent, child)` in discovery order of the child.
    fn tree_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order
            .iter()
            .filter_map(move |&v| self.parent[v].map(|p| (p, v)))
    }
}

/// Pending DFS work for one vertex.
struct Frame {
    node: usize,
    parent: Option<usize>,
    /// Next position in the node's adjacency list
    cursor: usize,
    /// Only one edge back to the parent is the tree edge; parallel copies
    /// count as back edges.
    parent_edge_skipped: bool,
}

fn low_link(graph: &UnGraph, root: usize) -> Option<LowLink> {
    let n = graph.node_count();
    if root >= n {
        return None;
    }

    let mut ll = LowLink {
        root,
        disc: vec![0; n],
        low: vec![0; n],
        parent: vec![None; n],
        order: vec![root],
        root_children: 0,
    };
    let mut time = 1;
    ll.disc[root] = time;
    ll.low[root] = time;

    let mut stack = vec![Frame {
        node: root,
        parent: None,
        cursor: 0,
        parent_edge_skipped: false,
    }];

    while let Some(frame) = stack.last_mut() {
        let u = frame.node;
        let neighbors = graph.neighbors_slice(u);

        if frame.cursor < neighbors.len() {
            let v = neighbors[frame.cursor].node;
            frame.cursor += 1;

            if frame.parent == Some(v) && !frame.parent_edge_skipped {
                frame.parent_edge_skipped = true;
                continue;
            }

            if ll.disc[v] != 0 {
                // Back edge
                ll.low[u] = ll.low[u].min(ll.disc[v]);
            } else {
                if u == root {
                    ll.root_children += 1;
                }
                time += 1;
                ll.disc[v] = time;
                ll.low[v] = time;
                ll.parent[v] = Some(u);
                ll.order.push(v);
                stack.push(Frame {
                    node: v,
                    parent: Some(u),
                    cursor: 0,
                    parent_edge_skipped: false,
                });
            }
        } else {
            stack.pop();
            if let Some(p) = ll.parent[u] {
                ll.low[p] = ll.low[p].min(ll.low[u]);
            }
        }
    }

    Some(ll)
}

/// Find articulation points in the component containing `start`.
///
/// A vertex v is an articulation point if:
/// 1. v is the DFS root and has more than one DFS child, OR
/// 2. v is not the root and has a child u with low[u] >= disc[v]
///
/// The result does not depend on which vertex of the component is `start`.
///
/// # Returns
/// Vertex indices in ascending order.
pub fn articulation_points(graph: &UnGraph, start: usize) -> Vec<usize> {
    let Some(ll) = low_link(graph, start) else {
        return Vec::new();
    };

    let mut is_ap = vec![false; graph.node_count()];
    if ll.root_children > 1 {
        is_ap[ll.root] = true;
    }
    for (p, v) in ll.tree_edges() {
        if p != ll.root && ll.low[v] >= ll.disc[p] {
            is_ap[p] = true;
        }
    }

    let points: Vec<usize> = is_ap
        .iter()
        .enumerate()
        .filter_map(|(i, &ap)| if ap { Some(i) } else { None })
        .collect();

    debug!(
        start,
        component = ll.order.len(),
        cut_vertices = points.len(),
        "articulation points computed"
    );
    points
}

/// Find bridges (cut edges) in the component containing `start`.
///
/// Tree edge p-v is a bridge when low[v] > disc[p]. Edges are reported as
/// `(min, max)` index pairs, sorted.
pub fn bridges(graph: &UnGraph, start: usize) -> Vec<(usize, usize)> {
    let Some(ll) = low_link(graph, start) else {
        return Vec::new();
    };

    let mut bridge_list: Vec<(usize, usize)> = ll
        .tree_edges()
        .filter(|&(p, v)| ll.low[v] > ll.disc[p])
        .map(|(p, v)| (p.min(v), p.max(v)))
        .collect();
    bridge_list.sort_unstable();

    debug!(start, bridges = bridge_list.len(), "bridges computed");
    bridge_list
}
