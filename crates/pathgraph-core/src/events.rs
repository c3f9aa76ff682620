//! Graph lifecycle events and the sinks that receive them
//!
//! The builder and the query operations report what they did through an
//! [`EventSink`]. Sinks observe only: nothing a sink does can change a graph
//! or a query result.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use crate::edge::{EdgeError, EdgeRecord, VertexId, Weight};

/// Why a path query produced no result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotFoundReason {
    /// One of the endpoints is not a vertex of the graph
    VertexNotFound,
    /// Both endpoints exist but relaxation never reached the destination
    Unreachable,
}

impl NotFoundReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VertexNotFound => "vertex-not-found",
            Self::Unreachable => "unreachable",
        }
    }
}

/// Structured events emitted by graph construction and queries
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum GraphEvent {
    EdgeAccepted {
        edge: EdgeRecord,
    },
    EdgeRejected {
        begin: VertexId,
        end: VertexId,
        weight: Weight,
        reason: EdgeError,
    },
    GraphBuilt {
        vertices: usize,
        edges: usize,
        rejected: usize,
    },
    ConnectivityChecked {
        connected: bool,
        first_unreached: Option<VertexId>,
    },
    PathFound {
        from: VertexId,
        to: VertexId,
        path: Vec<VertexId>,
        weight: i64,
    },
    PathNotFound {
        from: VertexId,
        to: VertexId,
        reason: NotFoundReason,
    },
}

/// Receiver for [`GraphEvent`]s
///
/// Built graphs may be queried from several threads, so sinks must be
/// shareable.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &GraphEvent);
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &GraphEvent) {
        match event {
            GraphEvent::EdgeAccepted { edge } => {
                tracing::debug!(
                    begin = edge.begin(),
                    end = edge.end(),
                    weight = edge.weight(),
                    "edge_accepted"
                );
            }
            GraphEvent::EdgeRejected {
                begin,
                end,
                weight,
                reason,
            } => {
                tracing::warn!(begin, end, weight, reason = %reason, "edge_rejected");
            }
            GraphEvent::GraphBuilt {
                vertices,
                edges,
                rejected,
            } => {
                tracing::info!(vertices, edges, rejected, "graph_built");
            }
            GraphEvent::ConnectivityChecked {
                connected: true, ..
            } => {
                tracing::info!("graph_connected");
            }
            GraphEvent::ConnectivityChecked {
                connected: false,
                first_unreached,
            } => {
                tracing::warn!(first_unreached = ?first_unreached, "graph_not_connected");
            }
            GraphEvent::PathFound {
                from,
                to,
                path,
                weight,
            } => {
                tracing::info!(from, to, path = ?path, weight, "path_found");
            }
            GraphEvent::PathNotFound { from, to, reason } => {
                tracing::warn!(from, to, reason = reason.as_str(), "path_not_found");
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &GraphEvent) {}
}

/// Keeps every event in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<GraphEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<GraphEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: &GraphEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}
