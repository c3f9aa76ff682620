//! Graph algorithm implementations
//!
//! Contains the matrix algorithms behind the `Graph` queries:
//! - `bfs`: Reachability from the root vertex
//! - `relax`: Two-phase and converged distance relaxation

pub mod bfs;
pub mod relax;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

pub use bfs::{first_unreached, reachable_from_root};
pub use relax::{relax, Relaxation};

/// How far distance relaxation is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelaxationMode {
    /// One pass over the source's neighbours, then one global pass.
    /// Exact within two hops; longer chains resolve only when dense-index
    /// order happens to follow the path.
    #[default]
    TwoPhase,
    /// Repeat the global pass until no distance improves
    Converged,
}

impl FromStr for RelaxationMode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "two-phase" => Ok(RelaxationMode::TwoPhase),
            "converged" => Ok(RelaxationMode::Converged),
            other => Err(GraphError::unsupported(
                "relaxation mode",
                other,
                "two-phase, converged",
            )),
        }
    }
}

impl fmt::Display for RelaxationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelaxationMode::TwoPhase => write!(f, "two-phase"),
            RelaxationMode::Converged => write!(f, "converged"),
        }
    }
}
