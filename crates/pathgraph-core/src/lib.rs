//! Pathgraph Core Library
//!
//! Core domain logic for pathgraph: building a directed, weighted graph from
//! edge triples and answering reachability and lowest-weight path queries.

pub mod config;
pub mod edge;
pub mod error;
pub mod events;
pub mod format;
pub mod graph;
pub mod logging;

pub use edge::{EdgeError, EdgeRecord, VertexId, Weight};
pub use graph::{Graph, GraphBuilder, PathResult, RelaxationMode};
