//! Single-source shortest paths (Dijkstra).
//!
//! Requires non-negative weights, which the graph store enforces.

use serde::Serialize;
use std::collections::BinaryHeap;

use tracing::debug;

use super::scored::MinScored;
use crate::error::{GraphError, Result};
use crate::graph::{UnGraph, Weight};

/// Distances and parent pointers from one source vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathTree {
    pub source: usize,
    /// `None` marks an unreachable vertex
    pub dist: Vec<Option<Weight>>,
    /// Predecessor on the shortest path; `None` for the source and unreachable vertices
    pub parent: Vec<Option<usize>>,
}

impl ShortestPathTree {
    pub fn distance_to(&self, target: usize) -> Option<Weight> {
        self.dist.get(target).copied().flatten()
    }

    /// Vertices from source to `target` inclusive, or `None` if unreachable.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance_to(target)?;

        let mut path = vec![target];
        let mut current = target;
        while let Some(p) = self.parent[current] {
            path.push(p);
            current = p;
        }
        path.reverse();
        Some(path)
    }

    /// Resolve every vertex into a labeled entry, in index order.
    ///
    /// Fails with `InvalidIndex` when the tree was not computed from a vertex
    /// of `graph`.
    pub fn labeled(&self, graph: &UnGraph) -> Result<ShortestPaths> {
        let labels = graph.labels();
        if self.source >= labels.len() || self.dist.len() != labels.len() {
            return Err(GraphError::InvalidIndex {
                index: self.source,
                node_count: labels.len(),
            });
        }

        let source = labels[self.source].clone();
        let entries = (0..self.dist.len())
            .map(|target| PathEntry {
                target: labels[target].clone(),
                distance: self.distance_to(target),
                path: self
                    .path_to(target)
                    .map(|p| graph.labels_for(&p))
                    .unwrap_or_default(),
            })
            .collect();

        Ok(ShortestPaths { source, entries })
    }
}

/// Shortest path to one target, by label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    pub target: String,
    /// `None` when the target is unreachable
    pub distance: Option<Weight>,
    /// Source to target inclusive; empty when unreachable
    pub path: Vec<String>,
}

impl PathEntry {
    pub fn is_reachable(&self) -> bool {
        self.distance.is_some()
    }
}

/// Label-level Dijkstra result: one entry per vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: String,
    pub entries: Vec<PathEntry>,
}

impl ShortestPaths {
    pub fn get(&self, target: &str) -> Option<&PathEntry> {
        self.entries.iter().find(|e| e.target == target)
    }
}

/// Dijkstra from `source` over the whole reachable component.
///
/// Stale heap entries (a better distance was recorded after the push) are
/// skipped on pop instead of being removed from the heap. Sums are exact:
/// `UnGraph::max_weight` keeps every candidate distance below `Weight::MAX`.
pub fn dijkstra(graph: &UnGraph, source: usize) -> ShortestPathTree {
    let n = graph.node_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];

    if source >= n {
        return ShortestPathTree {
            source,
            dist,
            parent,
        };
    }

    let mut heap = BinaryHeap::new();
    dist[source] = Some(0);
    heap.push(MinScored(0, source));

    while let Some(MinScored(d, u)) = heap.pop() {
        if dist[u].is_some_and(|best| d > best) {
            continue;
        }

        for nb in graph.neighbors_slice(u) {
            let candidate = d + nb.weight;
            if dist[nb.node].map_or(true, |best| candidate < best) {
                dist[nb.node] = Some(candidate);
                parent[nb.node] = Some(u);
                heap.push(MinScored(candidate, nb.node));
            }
        }
    }

    debug!(
        source,
        reachable = dist.iter().filter(|d| d.is_some()).count(),
        "dijkstra finished"
    );

    ShortestPathTree {
        source,
        dist,
        parent,
    }
}
