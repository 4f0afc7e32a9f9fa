//! Weighted undirected graph analysis.
//!
//! A fixed, labeled vertex set with weighted edges, and the algorithms that
//! read it: BFS/DFS order, Dijkstra shortest paths, Prim minimum spanning
//! tree, and articulation points / bridges. The Rust API lives on
//! [`UnGraph`] and in [`algorithms`]; [`wasm`] exposes the same operations
//! to JavaScript.

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod wasm;

pub use algorithms::mst::{SpanningTree, TreeEdge};
pub use algorithms::shortest_path::{PathEntry, ShortestPathTree, ShortestPaths};
pub use error::{GraphError, Result};
pub use graph::{EdgePolicy, Neighbor, UnGraph, Weight};

use wasm_bindgen::prelude::*;

/// Module initialization hook, run when the wasm module loads.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
