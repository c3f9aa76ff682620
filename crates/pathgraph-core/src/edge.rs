//! Validated edge records
//!
//! An [`EdgeRecord`] only exists if its endpoints are non-negative and its
//! weight is strictly positive. Construction is fallible; callers decide what
//! to do with an [`EdgeError`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::bail_invalid;
use crate::error::GraphError;

/// External vertex identifier
pub type VertexId = i32;

/// Edge weight
pub type Weight = i32;

/// Reasons an edge triple is refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum EdgeError {
    #[error("begin vertex must be non-negative, got {begin}")]
    NegativeBegin { begin: VertexId },

    #[error("end vertex must be non-negative, got {end}")]
    NegativeEnd { end: VertexId },

    #[error("weight must be positive, got {weight}")]
    NonPositiveWeight { weight: Weight },
}

/// A directed, weighted edge between two vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeRecord {
    begin: VertexId,
    end: VertexId,
    weight: Weight,
}

impl EdgeRecord {
    /// Validate a triple and build an edge from it.
    ///
    /// Constraints are checked in field order, so the reported error names the
    /// first offending field.
    pub fn new(begin: VertexId, end: VertexId, weight: Weight) -> Result<Self, EdgeError> {
        if begin < 0 {
            return Err(EdgeError::NegativeBegin { begin });
        }
        if end < 0 {
            return Err(EdgeError::NegativeEnd { end });
        }
        if weight <= 0 {
            return Err(EdgeError::NonPositiveWeight { weight });
        }

        Ok(Self { begin, end, weight })
    }

    /// Initial vertex of the edge
    pub fn begin(&self) -> VertexId {
        self.begin
    }

    /// Terminal vertex of the edge
    pub fn end(&self) -> VertexId {
        self.end
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl TryFrom<(VertexId, VertexId, Weight)> for EdgeRecord {
    type Error = EdgeError;

    fn try_from((begin, end, weight): (VertexId, VertexId, Weight)) -> Result<Self, Self::Error> {
        Self::new(begin, end, weight)
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.begin, self.end, self.weight)
    }
}

/// An unvalidated `begin:end:weight` triple as typed by a user.
///
/// Parsing only checks that the three parts are integers; whether they form
/// a valid edge is decided by [`EdgeRecord::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    pub begin: VertexId,
    pub end: VertexId,
    pub weight: Weight,
}

impl FromStr for EdgeSpec {
    type Err = GraphError;

    /// Accepts `B:E:W` or `B,E,W`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = if s.contains(':') { ':' } else { ',' };
        let parts: Vec<&str> = s.split(separator).map(str::trim).collect();

        let [begin, end, weight] = parts.as_slice() else {
            bail_invalid!("edge (expected BEGIN:END:WEIGHT)", s);
        };

        let (Ok(begin), Ok(end), Ok(weight)) = (
            begin.parse::<VertexId>(),
            end.parse::<VertexId>(),
            weight.parse::<Weight>(),
        ) else {
            bail_invalid!("edge (expected integers)", s);
        };

        Ok(Self { begin, end, weight })
    }
}
