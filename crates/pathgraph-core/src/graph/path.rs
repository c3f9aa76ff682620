//! Path results returned by lowest-weight queries

use std::fmt;

use serde::Serialize;

use crate::edge::VertexId;

/// Ordered vertex ids from source to destination, both inclusive
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PathResult {
    sequence: Vec<VertexId>,
}

impl PathResult {
    /// Build from a destination-to-source walk, reversing it once
    pub fn from_reversed(mut reversed: Vec<VertexId>) -> Self {
        reversed.reverse();
        Self { sequence: reversed }
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.sequence
    }

    pub fn source(&self) -> Option<VertexId> {
        self.sequence.first().copied()
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.sequence.last().copied()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.sequence.len().saturating_sub(1)
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl From<PathResult> for Vec<VertexId> {
    fn from(path: PathResult) -> Self {
        path.sequence
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .sequence
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "Path ( {} )", joined)
    }
}
