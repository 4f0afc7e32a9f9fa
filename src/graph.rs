//! Core undirected weighted graph structure with labeled vertices.

use serde::Serialize;
use std::collections::HashMap;

use crate::algorithms::articulation;
use crate::algorithms::mst::{self, SpanningTree};
use crate::algorithms::shortest_path::{self, ShortestPaths};
use crate::algorithms::traversal;
use crate::error::{GraphError, Result};

/// Edge weight. Negative values are rejected at insertion.
pub type Weight = i64;

/// One adjacency entry: the vertex on the other end and the edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Neighbor {
    pub node: usize,
    pub weight: Weight,
}

/// Controls which edge shapes `add_edge` accepts.
///
/// The default is permissive: self-loops and parallel edges are stored as
/// given and every algorithm tolerates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgePolicy {
    pub allow_self_loops: bool,
    pub allow_parallel_edges: bool,
}

impl Default for EdgePolicy {
    fn default() -> Self {
        Self {
            allow_self_loops: true,
            allow_parallel_edges: true,
        }
    }
}

impl EdgePolicy {
    /// Reject both self-loops and parallel edges.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_self_loops: false,
            allow_parallel_edges: false,
        }
    }

    #[must_use]
    pub const fn allow_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }

    #[must_use]
    pub const fn allow_parallel_edges(mut self, allow: bool) -> Self {
        self.allow_parallel_edges = allow;
        self
    }
}

/// Undirected weighted graph with a fixed, labeled vertex set.
///
/// Adjacency lists are kept sorted by neighbor index at insertion time, so
/// every traversal sees neighbors in ascending index order without sorting
/// per call. Entries with the same neighbor keep insertion order.
#[derive(Debug, Clone)]
pub struct UnGraph {
    /// Vertex labels, position = vertex index
    labels: Vec<String>,

    /// Reverse lookup: label -> index
    label_index: HashMap<String, usize>,

    /// adj[u] = (neighbor, weight) pairs, sorted by neighbor
    adj: Vec<Vec<Neighbor>>,

    /// Inserted edges (a self-loop counts once)
    edge_count: usize,

    policy: EdgePolicy,
}

impl UnGraph {
    /// Create a graph with one vertex per label, indexed by position.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_policy(labels, EdgePolicy::default())
    }

    /// Create a graph that validates edges against `policy`.
    pub fn with_policy<I, S>(labels: I, policy: EdgePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = UnGraph {
            labels: Vec::new(),
            label_index: HashMap::new(),
            adj: Vec::new(),
            edge_count: 0,
            policy,
        };

        for label in labels {
            let label = label.as_ref();
            if graph.label_index.contains_key(label) {
                return Err(GraphError::DuplicateLabel(label.to_string()));
            }
            graph.label_index.insert(label.to_string(), graph.labels.len());
            graph.labels.push(label.to_string());
            graph.adj.push(Vec::new());
        }

        Ok(graph)
    }

    /// Add an undirected edge `u - v`. On error the graph is left unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: Weight) -> Result<()> {
        self.check_index(u)?;
        self.check_index(v)?;
        if weight < 0 {
            return Err(GraphError::NegativeWeight { weight });
        }
        let max = self.max_weight();
        if weight > max {
            return Err(GraphError::WeightTooLarge { weight, max });
        }
        if u == v && !self.policy.allow_self_loops {
            return Err(GraphError::SelfLoop { node: u });
        }
        if !self.policy.allow_parallel_edges && self.adj[u].iter().any(|n| n.node == v) {
            return Err(GraphError::ParallelEdge {
                u: u.min(v),
                v: u.max(v),
            });
        }

        self.insert_sorted(u, Neighbor { node: v, weight });
        self.insert_sorted(v, Neighbor { node: u, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Add an edge by vertex labels.
    pub fn add_edge_by_label(&mut self, u: &str, v: &str, weight: Weight) -> Result<()> {
        let u = self.index_of(u)?;
        let v = self.index_of(v)?;
        self.add_edge(u, v, weight)
    }

    /// Neighbors of `u` in ascending index order.
    pub fn neighbors(&self, u: usize) -> Result<&[Neighbor]> {
        self.check_index(u)?;
        Ok(&self.adj[u])
    }

    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.label_index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
    }

    pub fn label_of(&self, index: usize) -> Result<&str> {
        self.check_index(index)?;
        Ok(&self.labels[index])
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of adjacency entries of `u` (a self-loop contributes two).
    pub fn degree(&self, u: usize) -> Result<usize> {
        Ok(self.neighbors(u)?.len())
    }

    /// Largest accepted edge weight: `Weight::MAX / V`.
    ///
    /// A Dijkstra candidate spans at most V edges and a spanning tree V - 1,
    /// so no distance or tree total can overflow.
    pub fn max_weight(&self) -> Weight {
        Weight::MAX / self.node_count().max(1) as Weight
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Dense weight matrix. `Some(0)` on the diagonal, `None` where no edge
    /// exists; the lightest weight wins among parallel edges.
    pub fn adjacency_matrix(&self) -> Vec<Vec<Option<Weight>>> {
        let n = self.node_count();
        let mut matrix = vec![vec![None; n]; n];

        for (u, row) in matrix.iter_mut().enumerate() {
            for nb in &self.adj[u] {
                let cell = &mut row[nb.node];
                *cell = Some(cell.map_or(nb.weight, |w: Weight| w.min(nb.weight)));
            }
            row[u] = Some(0);
        }

        matrix
    }

    /// Breadth-first visitation order from `start`, as labels.
    pub fn bfs(&self, start: &str) -> Result<Vec<String>> {
        let start = self.index_of(start)?;
        Ok(self.labels_for(&traversal::bfs(self, start)))
    }

    /// Depth-first visitation order from `start`, as labels.
    pub fn dfs(&self, start: &str) -> Result<Vec<String>> {
        let start = self.index_of(start)?;
        Ok(self.labels_for(&traversal::dfs(self, start)))
    }

    /// Shortest distance and path from `start` to every vertex.
    pub fn dijkstra(&self, start: &str) -> Result<ShortestPaths> {
        let start = self.index_of(start)?;
        shortest_path::dijkstra(self, start).labeled(self)
    }

    /// Minimum spanning tree of the component containing `start`.
    pub fn prim(&self, start: &str) -> Result<SpanningTree<String>> {
        let start = self.index_of(start)?;
        Ok(mst::prim(self, start).map_nodes(|i| self.labels[i].clone()))
    }

    /// Cut vertices of the component containing `start`, in index order.
    pub fn articulation_points(&self, start: &str) -> Result<Vec<String>> {
        let start = self.index_of(start)?;
        Ok(self.labels_for(&articulation::articulation_points(self, start)))
    }

    /// Cut edges of the component containing `start`.
    pub fn bridges(&self, start: &str) -> Result<Vec<(String, String)>> {
        let start = self.index_of(start)?;
        Ok(articulation::bridges(self, start)
            .into_iter()
            .map(|(u, v)| (self.labels[u].clone(), self.labels[v].clone()))
            .collect())
    }
}

// Internal methods
impl UnGraph {
    /// Neighbor slice without bounds reporting (internal use).
    pub(crate) fn neighbors_slice(&self, u: usize) -> &[Neighbor] {
        self.adj.get(u).map_or(&[], |v| v.as_slice())
    }

    pub(crate) fn labels_for(&self, nodes: &[usize]) -> Vec<String> {
        nodes.iter().map(|&i| self.labels[i].clone()).collect()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.labels.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex {
                index,
                node_count: self.labels.len(),
            })
        }
    }

    fn insert_sorted(&mut self, at: usize, entry: Neighbor) {
        let list = &mut self.adj[at];
        let pos = list.partition_point(|n| n.node <= entry.node);
        list.insert(pos, entry);
    }
}
