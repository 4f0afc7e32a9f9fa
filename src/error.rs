//! Error types for graph construction and queries.

use thiserror::Error;

use crate::graph::Weight;

/// Errors raised by the graph store and the label-addressed algorithm API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Two vertices were given the same label at construction.
    #[error("duplicate vertex label: {0}")]
    DuplicateLabel(String),

    /// No vertex carries this label.
    #[error("unknown vertex label: {0}")]
    UnknownLabel(String),

    /// Vertex index outside `0..node_count`.
    #[error("vertex index {index} out of range (graph has {node_count} vertices)")]
    InvalidIndex { index: usize, node_count: usize },

    /// Edge weights must be non-negative.
    #[error("negative edge weight: {weight}")]
    NegativeWeight { weight: Weight },

    /// Weight above [`UnGraph::max_weight`](crate::graph::UnGraph::max_weight),
    /// so path and tree sums could overflow.
    #[error("edge weight {weight} exceeds limit {max}")]
    WeightTooLarge { weight: Weight, max: Weight },

    /// Self-loop rejected by a strict [`EdgePolicy`](crate::graph::EdgePolicy).
    #[error("self-loop on vertex {node} rejected by edge policy")]
    SelfLoop { node: usize },

    /// Parallel edge rejected by a strict [`EdgePolicy`](crate::graph::EdgePolicy).
    #[error("parallel edge {u}-{v} rejected by edge policy")]
    ParallelEdge { u: usize, v: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
