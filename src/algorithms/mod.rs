//! Graph algorithm implementations.
//!
//! Every algorithm reads a shared `&UnGraph` and keeps its working state
//! (visited flags, distance arrays, queues) local to the call.

pub mod articulation;
pub mod mst;
pub mod scored;
pub mod shortest_path;
pub mod traversal;

pub use scored::MinScored;
