//! Fluent accumulation of edges into a [`Graph`]

use std::sync::Arc;

use serde::Serialize;

use crate::edge::{EdgeError, EdgeRecord, VertexId, Weight};
use crate::events::{EventSink, GraphEvent, TracingSink};
use crate::graph::Graph;

/// An input triple the builder refused, with the reason
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RejectedEdge {
    pub begin: VertexId,
    pub end: VertexId,
    pub weight: Weight,
    pub error: EdgeError,
}

/// Collects edges for a new graph.
///
/// Invalid triples are dropped and remembered; they never stop the build.
/// Not meant to be shared between threads while edges are being added.
pub struct GraphBuilder {
    edges: Vec<EdgeRecord>,
    rejected: Vec<RejectedEdge>,
    sink: Arc<dyn EventSink>,
}

impl GraphBuilder {
    /// Builder that reports through `tracing`
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    pub fn with_sink(sink: Arc<dyn EventSink>) -> Self {
        Self {
            edges: Vec::new(),
            rejected: Vec::new(),
            sink,
        }
    }

    /// Add the edge `begin -> end` with the given weight
    pub fn edge(mut self, begin: VertexId, end: VertexId, weight: Weight) -> Self {
        self.push_edge(begin, end, weight);
        self
    }

    /// Add every triple from an iterator
    pub fn edges<I>(mut self, triples: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        for (begin, end, weight) in triples {
            self.push_edge(begin, end, weight);
        }
        self
    }

    /// Non-consuming form of [`GraphBuilder::edge`]; returns whether the
    /// edge was accepted.
    pub fn push_edge(&mut self, begin: VertexId, end: VertexId, weight: Weight) -> bool {
        match EdgeRecord::new(begin, end, weight) {
            Ok(edge) => {
                self.sink.record(&GraphEvent::EdgeAccepted { edge });
                self.edges.push(edge);
                true
            }
            Err(error) => {
                self.sink.record(&GraphEvent::EdgeRejected {
                    begin,
                    end,
                    weight,
                    reason: error,
                });
                self.rejected.push(RejectedEdge {
                    begin,
                    end,
                    weight,
                    error,
                });
                false
            }
        }
    }

    /// Accepted edges so far
    pub fn accepted(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn rejected(&self) -> &[RejectedEdge] {
        &self.rejected
    }

    /// Freeze the accumulated edges into a graph
    #[tracing::instrument(skip(self), fields(edges = self.edges.len(), rejected = self.rejected.len()))]
    pub fn build(self) -> Graph {
        let graph = Graph::from_parts(self.edges, self.rejected, Arc::clone(&self.sink));

        self.sink.record(&GraphEvent::GraphBuilt {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            rejected: graph.rejected().len(),
        });

        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
