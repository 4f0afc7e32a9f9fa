//! Minimum spanning tree (Prim).
//!
//! Spans only the component containing the start vertex. Vertices outside
//! it are left out of the tree and its weight; that is not an error.

use serde::Serialize;
use std::collections::BinaryHeap;

use tracing::debug;

use super::scored::MinScored;
use crate::graph::{UnGraph, Weight};

/// An edge fixed into the tree: `from` was already in the tree, `to` joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge<N = usize> {
    pub from: N,
    pub to: N,
    pub weight: Weight,
}

/// Tree edges in the order they were fixed, plus their total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree<N = usize> {
    pub edges: Vec<TreeEdge<N>>,
    pub total_weight: Weight,
}

impl<N> SpanningTree<N> {
    /// Rewrite vertex identifiers, e.g. indices into labels.
    pub fn map_nodes<M>(self, mut f: impl FnMut(N) -> M) -> SpanningTree<M> {
        SpanningTree {
            edges: self
                .edges
                .into_iter()
                .map(|e| TreeEdge {
                    from: f(e.from),
                    to: f(e.to),
                    weight: e.weight,
                })
                .collect(),
            total_weight: self.total_weight,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Prim's algorithm from `start`.
///
/// `key[v]` is the lightest known edge connecting `v` to the tree. A popped
/// vertex that is already in the tree is a stale entry and is skipped. The
/// total cannot overflow: `UnGraph::max_weight` bounds every tree edge.
pub fn prim(graph: &UnGraph, start: usize) -> SpanningTree {
    let n = graph.node_count();
    let mut tree = SpanningTree {
        edges: Vec::new(),
        total_weight: 0,
    };
    if start >= n {
        return tree;
    }

    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = vec![false; n];
    let mut heap = BinaryHeap::new();

    key[start] = Some(0);
    heap.push(MinScored(0, start));

    while let Some(MinScored(k, u)) = heap.pop() {
        if in_tree[u] {
            continue;
        }
        in_tree[u] = true;

        if let Some(p) = parent[u] {
            tree.edges.push(TreeEdge {
                from: p,
                to: u,
                weight: k,
            });
            tree.total_weight += k;
        }

        for nb in graph.neighbors_slice(u) {
            let v = nb.node;
            if !in_tree[v] && key[v].map_or(true, |best| nb.weight < best) {
                key[v] = Some(nb.weight);
                parent[v] = Some(u);
                heap.push(MinScored(nb.weight, v));
            }
        }
    }

    debug!(
        start,
        edges = tree.edges.len(),
        total_weight = tree.total_weight,
        "prim finished"
    );
    tree
}
