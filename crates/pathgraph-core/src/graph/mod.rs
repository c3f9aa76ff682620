//! Directed, weighted graphs and the queries over them
//!
//! Provides:
//! - `GraphBuilder` for accumulating validated edges
//! - `Graph`, an immutable adjacency-matrix snapshot
//! - BFS reachability from the first discovered vertex
//! - Two-phase (or converged) relaxation for lowest-weight paths

pub mod algos;
pub mod builder;
pub mod matrix;
pub mod path;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::edge::{EdgeRecord, VertexId, Weight};
use crate::events::{EventSink, GraphEvent, NotFoundReason};

pub use algos::RelaxationMode;
pub use builder::{GraphBuilder, RejectedEdge};
pub use matrix::AdjacencyMatrix;
pub use path::PathResult;

/// Immutable graph snapshot produced by [`GraphBuilder::build`]
pub struct Graph {
    edges: Vec<EdgeRecord>,
    rejected: Vec<RejectedEdge>,
    /// Distinct vertex ids in first-seen order; position is the dense index
    vertices: Vec<VertexId>,
    index: HashMap<VertexId, usize>,
    matrix: AdjacencyMatrix,
    sink: Arc<dyn EventSink>,
}

impl Graph {
    pub(crate) fn from_parts(
        edges: Vec<EdgeRecord>,
        rejected: Vec<RejectedEdge>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let (vertices, index) = discover_vertices(&edges);

        let mut matrix = AdjacencyMatrix::new(vertices.len());
        for edge in &edges {
            // Later edges overwrite earlier ones on the same ordered pair
            matrix.set(index[&edge.begin()], index[&edge.end()], edge.weight());
        }

        Self {
            edges,
            rejected,
            vertices,
            index,
            matrix,
            sink,
        }
    }

    /// Vertex ids ordered by dense index
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Accepted edges in submission order, duplicates included
    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Inputs the builder refused
    pub fn rejected(&self) -> &[RejectedEdge] {
        &self.rejected
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.index.contains_key(&vertex)
    }

    /// Dense index of a vertex id
    pub fn index_of(&self, vertex: VertexId) -> Option<usize> {
        self.index.get(&vertex).copied()
    }

    /// Weight of the directed edge `from -> to` as stored in the matrix
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        self.matrix.edge(i, j)
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Sum of edge weights along a path, or `None` if some hop is not an edge
    pub fn path_weight(&self, path: &PathResult) -> Option<i64> {
        path.vertices()
            .windows(2)
            .map(|hop| self.weight(hop[0], hop[1]).map(i64::from))
            .sum()
    }

    /// Check that every vertex is reachable from the first discovered vertex
    /// along outgoing edges.
    ///
    /// A graph without vertices counts as connected.
    #[tracing::instrument(skip(self), fields(vertices = self.vertices.len()))]
    pub fn is_connected(&self) -> bool {
        let first_unreached = algos::first_unreached(&self.matrix).map(|i| self.vertices[i]);
        let connected = first_unreached.is_none();

        self.sink.record(&GraphEvent::ConnectivityChecked {
            connected,
            first_unreached,
        });

        connected
    }

    /// Vertices the root cannot reach along outgoing edges, in dense-index
    /// order. Pure read; reports no event.
    pub fn unreached(&self) -> Vec<VertexId> {
        algos::reachable_from_root(&self.matrix)
            .iter()
            .zip(&self.vertices)
            .filter(|(seen, _)| !**seen)
            .map(|(_, vertex)| *vertex)
            .collect()
    }

    /// Lowest-weight path using the two-phase relaxation.
    ///
    /// `None` covers both a missing endpoint and an unreachable destination.
    pub fn optimal_way(&self, from: VertexId, to: VertexId) -> Option<PathResult> {
        self.optimal_way_with(from, to, RelaxationMode::TwoPhase)
    }

    /// Lowest-weight path using an explicit relaxation mode
    #[tracing::instrument(skip(self), fields(vertices = self.vertices.len()))]
    pub fn optimal_way_with(
        &self,
        from: VertexId,
        to: VertexId,
        mode: RelaxationMode,
    ) -> Option<PathResult> {
        let (Some(source), Some(destination)) = (self.index_of(from), self.index_of(to)) else {
            self.sink.record(&GraphEvent::PathNotFound {
                from,
                to,
                reason: NotFoundReason::VertexNotFound,
            });
            return None;
        };

        let indices = algos::relax(&self.matrix, source, mode).path_to(destination);
        let Some(indices) = indices else {
            self.sink.record(&GraphEvent::PathNotFound {
                from,
                to,
                reason: NotFoundReason::Unreachable,
            });
            return None;
        };

        let path = PathResult::from_reversed(indices.into_iter().map(|i| self.vertices[i]).collect());

        self.sink.record(&GraphEvent::PathFound {
            from,
            to,
            path: path.vertices().to_vec(),
            weight: self.path_weight(&path).unwrap_or_default(),
        });

        Some(path)
    }
}

/// Collect distinct endpoints in order of first appearance
fn discover_vertices(edges: &[EdgeRecord]) -> (Vec<VertexId>, HashMap<VertexId, usize>) {
    let mut vertices = Vec::new();
    let mut index = HashMap::new();

    for edge in edges {
        for vertex in [edge.begin(), edge.end()] {
            index.entry(vertex).or_insert_with(|| {
                vertices.push(vertex);
                vertices.len() - 1
            });
        }
    }

    (vertices, index)
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph [")?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", edge)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .field("rejected", &self.rejected)
            .finish_non_exhaustive()
    }
}
