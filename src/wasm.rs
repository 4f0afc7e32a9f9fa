//! JavaScript bindings.
//!
//! `Graph` wraps an [`UnGraph`]; every algorithm takes a start label and
//! returns plain JS data produced by `serde-wasm-bindgen`. Errors surface as
//! thrown `Error`s.

use js_sys::Array;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::graph::{EdgePolicy, UnGraph, Weight};

/// Undirected weighted graph with a fixed set of labeled vertices.
#[wasm_bindgen(js_name = Graph)]
pub struct JsGraph {
    inner: UnGraph,
}

#[wasm_bindgen(js_class = Graph)]
impl JsGraph {
    /// Create a graph from an array of unique string labels.
    #[wasm_bindgen(constructor)]
    pub fn new(labels: Array) -> Result<JsGraph, JsError> {
        Self::build(labels, EdgePolicy::default())
    }

    /// Like the constructor, but self-loops and parallel edges are rejected.
    pub fn strict(labels: Array) -> Result<JsGraph, JsError> {
        Self::build(labels, EdgePolicy::strict())
    }

    /// Add an edge between two labeled vertices.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> Result<(), JsError> {
        let weight = to_weight(weight)?;
        Ok(self.inner.add_edge_by_label(u, v, weight)?)
    }

    /// Add an edge between two vertex indices.
    #[wasm_bindgen(js_name = addEdgeByIndex)]
    pub fn add_edge_by_index(&mut self, u: usize, v: usize, weight: f64) -> Result<(), JsError> {
        let weight = to_weight(weight)?;
        Ok(self.inner.add_edge(u, v, weight)?)
    }

    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    #[wasm_bindgen(js_name = indexOf)]
    pub fn index_of(&self, label: &str) -> Result<usize, JsError> {
        Ok(self.inner.index_of(label)?)
    }

    #[wasm_bindgen(js_name = labelOf)]
    pub fn label_of(&self, index: usize) -> Result<String, JsError> {
        Ok(self.inner.label_of(index)?.to_string())
    }

    /// Neighbors of a vertex as `[{ node, weight }]`, ascending by node.
    pub fn neighbors(&self, index: usize) -> Result<JsValue, JsError> {
        to_js(self.inner.neighbors(index)?)
    }

    /// Weight matrix; `null` where no edge exists, 0 on the diagonal.
    #[wasm_bindgen(js_name = adjacencyMatrix)]
    pub fn adjacency_matrix(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.adjacency_matrix())
    }

    /// Breadth-first visitation order as an array of labels.
    pub fn bfs(&self, start: &str) -> Result<JsValue, JsError> {
        to_js(&self.inner.bfs(start)?)
    }

    /// Depth-first visitation order as an array of labels.
    pub fn dfs(&self, start: &str) -> Result<JsValue, JsError> {
        to_js(&self.inner.dfs(start)?)
    }

    /// Returns `{ source, entries: [{ target, distance, path }] }`;
    /// `distance` is null for unreachable targets.
    pub fn dijkstra(&self, start: &str) -> Result<JsValue, JsError> {
        to_js(&self.inner.dijkstra(start)?)
    }

    /// Returns `{ edges: [{ from, to, weight }], total_weight }`.
    pub fn prim(&self, start: &str) -> Result<JsValue, JsError> {
        to_js(&self.inner.prim(start)?)
    }

    #[wasm_bindgen(js_name = articulationPoints)]
    pub fn articulation_points(&self, start: &str) -> Result<JsValue, JsError> {
        to_js(&self.inner.articulation_points(start)?)
    }

    /// Cut edges as `[from, to]` label pairs.
    pub fn bridges(&self, start: &str) -> Result<JsValue, JsError> {
        to_js(&self.inner.bridges(start)?)
    }
}

impl JsGraph {
    fn build(labels: Array, policy: EdgePolicy) -> Result<JsGraph, JsError> {
        let labels = labels
            .iter()
            .map(|v| {
                v.as_string()
                    .ok_or_else(|| JsError::new("vertex labels must be strings"))
            })
            .collect::<Result<Vec<String>, JsError>>()?;

        Ok(JsGraph {
            inner: UnGraph::with_policy(labels, policy)?,
        })
    }

    /// Borrow the wrapped graph.
    pub fn graph(&self) -> &UnGraph {
        &self.inner
    }
}

impl From<UnGraph> for JsGraph {
    fn from(inner: UnGraph) -> Self {
        JsGraph { inner }
    }
}

/// `Number.MAX_SAFE_INTEGER`: larger integers are not exact in a JS number.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn to_weight(weight: f64) -> Result<Weight, JsError> {
    if !weight.is_finite() || weight.fract() != 0.0 {
        return Err(JsError::new(&format!(
            "edge weight must be an integer, got {weight}"
        )));
    }
    if weight.abs() > MAX_SAFE_INTEGER {
        return Err(JsError::new(&format!(
            "edge weight {weight} is outside the safe integer range"
        )));
    }
    Ok(weight as Weight)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}
