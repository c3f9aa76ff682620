//! CLI commands for pathgraph

pub mod connected;
pub mod dispatch;
pub mod inspect;
pub mod path;
