//! CLI argument parsing for pathgraph
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --config, --strict

pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pathgraph_core::edge::EdgeSpec;
use pathgraph_core::graph::RelaxationMode;
use parse::{parse_edge_spec, parse_output_format, parse_relaxation_mode};

pub use pathgraph_core::format::OutputFormat;

/// Pathgraph - reachability and lowest-weight paths over weighted directed graphs
#[derive(Parser, Debug)]
#[command(name = "pathgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. "debug" or "pathgraph_core=trace")
    #[arg(long, global = true, env = "PATHGRAPH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail if any edge is rejected
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether every vertex is reachable from the first one
    Connected(GraphArgs),

    /// Find the lowest-weight path between two vertices
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Source vertex
        #[arg(long, allow_hyphen_values = true)]
        from: i32,

        /// Destination vertex
        #[arg(long, allow_hyphen_values = true)]
        to: i32,

        /// Relaxation mode (two-phase, converged); defaults to the config value
        #[arg(long, value_parser = parse_relaxation_mode)]
        mode: Option<RelaxationMode>,
    },

    /// Show vertices, adjacency matrix and rejected edges
    Inspect(GraphArgs),
}

/// Edges shared by every command
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Edge as BEGIN:END:WEIGHT (repeatable)
    #[arg(
        long = "edge",
        short = 'e',
        value_name = "BEGIN:END:WEIGHT",
        value_parser = parse_edge_spec,
        allow_hyphen_values = true,
        action = clap::ArgAction::Append
    )]
    pub edges: Vec<EdgeSpec>,
}
